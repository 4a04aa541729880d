use crate::domain::errors::{ProviderError, ProviderResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

const UPSTREAM_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current-time lookup result as returned by the Abstract Timezone API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneInfo {
    pub datetime: String, // local wall-clock time, "YYYY-MM-DD HH:MM:SS"
    pub timezone_name: String,
    pub timezone_location: String, // IANA name, e.g. "America/New_York"
    pub timezone_abbreviation: String,
    pub gmt_offset: f64, // hours, may be fractional
    pub is_dst: bool,
    pub requested_location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TimezoneInfo {
    /// Parse the machine-readable `datetime` field into a wall-clock value
    pub fn local_datetime(&self) -> ProviderResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.datetime, UPSTREAM_DATETIME_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(&self.datetime).map(|dt| dt.naive_local()))
            .map_err(|e| ProviderError::Decode {
                context: format!(
                    "Invalid datetime \"{}\" for {}",
                    self.datetime, self.requested_location
                ),
                message: e.to_string(),
            })
    }
}

/// Calendar date, weekday and hour in the contact's own timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub hour: u32,
}

impl LocalMoment {
    pub fn new(date: NaiveDate, hour: u32) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            hour,
        }
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self::new(datetime.date(), datetime.hour())
    }

    pub fn from_timezone(info: &TimezoneInfo) -> ProviderResult<Self> {
        info.local_datetime().map(Self::from_datetime)
    }

    pub fn is_weekday(&self) -> bool {
        !matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}
