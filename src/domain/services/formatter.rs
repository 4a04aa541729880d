use crate::domain::entities::{LocalDateTimeDisplay, TimezoneInfo};
use crate::domain::errors::ProviderResult;
use serde::Serialize;

const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const TIME_FORMAT: &str = "%I:%M:%S %p";

/// Date and time of a lookup rendered separately for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeDisplay {
    pub date: String,
    pub time: String,
}

/// `Friday, June 27, 2025`
pub fn format_date(info: &TimezoneInfo) -> ProviderResult<String> {
    Ok(info.local_datetime()?.format(DATE_FORMAT).to_string())
}

/// `02:00:00 PM`
pub fn format_time(info: &TimezoneInfo) -> ProviderResult<String> {
    Ok(info.local_datetime()?.format(TIME_FORMAT).to_string())
}

/// `Friday, June 27, 2025 at 02:00:00 PM EDT`
pub fn format_date_time(info: &TimezoneInfo) -> ProviderResult<String> {
    let local = info.local_datetime()?;
    Ok(format!(
        "{} at {} {}",
        local.format(DATE_FORMAT),
        local.format(TIME_FORMAT),
        info.timezone_abbreviation
    ))
}

/// Date plus zone-qualified time, e.g. `02:00:00 PM EDT`
pub fn format_separated(info: &TimezoneInfo) -> ProviderResult<DateTimeDisplay> {
    Ok(DateTimeDisplay {
        date: format_date(info)?,
        time: format!("{} {}", format_time(info)?, info.timezone_abbreviation),
    })
}

/// Date/time/timezone triple used by the contact availability response.
/// The zone travels in its own field, so `local_time` is bare.
pub fn local_date_time_display(info: &TimezoneInfo) -> ProviderResult<LocalDateTimeDisplay> {
    Ok(LocalDateTimeDisplay {
        date: format_date(info)?,
        local_time: format_time(info)?,
        timezone: info.timezone_abbreviation.clone(),
    })
}

/// Render an hour offset from GMT as `GMT+05:30`
pub fn timezone_offset(gmt_offset: f64) -> String {
    let sign = if gmt_offset >= 0.0 { '+' } else { '-' };
    let total_minutes = (gmt_offset.abs() * 60.0).round() as i64;
    format!(
        "GMT{}{:02}:{:02}",
        sign,
        total_minutes / 60,
        total_minutes % 60
    )
}
