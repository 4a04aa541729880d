pub mod availability_classifier;
pub mod country_codes;
pub mod formatter;

pub use availability_classifier::{classify, next_slot};
