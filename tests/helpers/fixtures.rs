use chrono::NaiveDate;
use contact_availability::domain::entities::{Holiday, TimezoneInfo};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn holiday(on: NaiveDate, name: &str, country_code: &str) -> Holiday {
    Holiday {
        date: on,
        local_name: name.to_string(),
        name: name.to_string(),
        country_code: country_code.to_string(),
        fixed: false,
        global: true,
        counties: None,
        launch_year: None,
        types: vec!["Public".to_string()],
    }
}

/// Timezone payload for a contact in Boston at the given wall-clock time
pub fn boston_time(datetime: &str) -> TimezoneInfo {
    TimezoneInfo {
        datetime: datetime.to_string(),
        timezone_name: "Eastern Daylight Time".to_string(),
        timezone_location: "America/New_York".to_string(),
        timezone_abbreviation: "EDT".to_string(),
        gmt_offset: -4.0,
        is_dst: true,
        requested_location: "Boston,MA,United States".to_string(),
        latitude: 42.3601,
        longitude: -71.0589,
    }
}

/// Timezone payload for a contact in Honolulu, ten hours behind UTC
pub fn honolulu_time(datetime: &str) -> TimezoneInfo {
    TimezoneInfo {
        datetime: datetime.to_string(),
        timezone_name: "Hawaii-Aleutian Standard Time".to_string(),
        timezone_location: "Pacific/Honolulu".to_string(),
        timezone_abbreviation: "HST".to_string(),
        gmt_offset: -10.0,
        is_dst: false,
        requested_location: "Honolulu,HI,United States".to_string(),
        latitude: 21.3069,
        longitude: -157.8583,
    }
}
