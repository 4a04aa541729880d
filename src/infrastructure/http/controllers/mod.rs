pub mod contact_availability;
pub mod holidays;
pub mod timezone;
