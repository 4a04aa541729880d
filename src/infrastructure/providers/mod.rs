pub mod abstract_timezone;
pub mod nager_date;

pub use abstract_timezone::AbstractTimezoneClient;
pub use nager_date::NagerDateClient;
