use crate::domain::entities::{
    AvailabilityStatus, AvailabilityVerdict, HolidayDates, LocalMoment, Recommendation,
};
use chrono::{Datelike, NaiveDate, Weekday};

/// First office hour, inclusive
pub const OFFICE_OPENS_AT: u32 = 9;
/// Last office hour, exclusive
pub const OFFICE_CLOSES_AT: u32 = 17;

/// How many days ahead the next-slot search looks before giving up
const LOOKAHEAD_DAYS: u32 = 7;

/// Classify a contact's local moment against their holiday calendar.
///
/// Holiday beats weekend beats office hours. Every status other than
/// `InOffice` carries the outcome of [`next_slot`].
pub fn classify(moment: &LocalMoment, holidays: &HolidayDates) -> AvailabilityVerdict {
    let status = if holidays.contains(moment.date) {
        AvailabilityStatus::PublicHoliday
    } else if !moment.is_weekday() {
        AvailabilityStatus::Weekend
    } else if (OFFICE_OPENS_AT..OFFICE_CLOSES_AT).contains(&moment.hour) {
        AvailabilityStatus::InOffice
    } else {
        AvailabilityStatus::OffHours
    };

    let recommendation = match status {
        AvailabilityStatus::InOffice => Recommendation::FreeToCall,
        _ => next_slot(moment, holidays),
    };

    AvailabilityVerdict {
        status,
        recommendation,
    }
}

/// Find the next 9AM calling opportunity on a non-holiday weekday.
pub fn next_slot(moment: &LocalMoment, holidays: &HolidayDates) -> Recommendation {
    if moment.is_weekday() && moment.hour < OFFICE_OPENS_AT && !holidays.contains(moment.date) {
        return Recommendation::Today;
    }

    let mut candidate = moment.date;
    for days_ahead in 1..=LOOKAHEAD_DAYS {
        candidate = match candidate.succ_opt() {
            Some(next) => next,
            None => break,
        };

        if is_working_day(candidate, holidays) {
            return if days_ahead == 1 {
                Recommendation::Tomorrow
            } else {
                Recommendation::On(candidate.weekday())
            };
        }
    }

    Recommendation::NextWeekday
}

fn is_working_day(date: NaiveDate, holidays: &HolidayDates) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(date)
}
