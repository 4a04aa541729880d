use crate::domain::entities::Holiday;
use chrono::Weekday;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AvailabilityStatus {
    #[serde(rename = "in office")]
    InOffice,
    #[serde(rename = "public holiday")]
    PublicHoliday,
    #[serde(rename = "weekend")]
    Weekend,
    #[serde(rename = "off hours")]
    OffHours,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::InOffice => "in office",
            AvailabilityStatus::PublicHoliday => "public holiday",
            AvailabilityStatus::Weekend => "weekend",
            AvailabilityStatus::OffHours => "off hours",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When to place the next call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    FreeToCall,
    Today,
    Tomorrow,
    On(Weekday),
    NextWeekday,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::FreeToCall => f.write_str("free to call"),
            Recommendation::Today => f.write_str("Call today at 9AM"),
            Recommendation::Tomorrow => f.write_str("Call tomorrow at 9AM"),
            Recommendation::On(day) => write!(f, "Call {} at 9AM", weekday_name(*day)),
            Recommendation::NextWeekday => f.write_str("Call next weekday at 9AM"),
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityVerdict {
    pub status: AvailabilityStatus,
    pub recommendation: Recommendation,
}

/// Local date/time display block of the contact availability response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDateTimeDisplay {
    pub date: String,
    pub local_time: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactAvailabilityResponse {
    pub datetime: LocalDateTimeDisplay,
    pub availability: AvailabilityVerdict,
    pub holidays: Vec<Holiday>,
}
