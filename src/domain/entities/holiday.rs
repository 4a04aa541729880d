use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Public holiday as published by the Nager.Date API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate, // YYYY-MM-DD
    pub local_name: String,
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub global: bool,
    pub counties: Option<Vec<String>>, // ISO 3166-2 subdivisions, None when nationwide
    pub launch_year: Option<i32>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Set of holiday dates used for membership checks.
///
/// Built from any collection of holidays; ordering and duplicates of the
/// source collection are irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayDates(BTreeSet<NaiveDate>);

impl HolidayDates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }
}

impl FromIterator<NaiveDate> for HolidayDates {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Holiday> for HolidayDates {
    fn from_iter<I: IntoIterator<Item = &'a Holiday>>(iter: I) -> Self {
        iter.into_iter().map(|h| h.date).collect()
    }
}

/// Response body for holiday listings
#[derive(Debug, Serialize, Deserialize)]
pub struct HolidayListResponse {
    pub holidays: Vec<Holiday>,
}
