use chrono::NaiveDate;

/// Source of the server's current date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
