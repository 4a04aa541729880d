use crate::domain::entities::Holiday;
use crate::domain::errors::ProviderResult;
use crate::domain::ports::{Clock, HolidayProvider};
use chrono::{Datelike, Duration, NaiveDate};
use std::sync::Arc;

/// Length of the upcoming-holiday window, both ends inclusive
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

#[derive(Clone)]
pub struct HolidayService {
    provider: Arc<dyn HolidayProvider>,
    clock: Arc<dyn Clock>,
}

impl HolidayService {
    pub fn new(provider: Arc<dyn HolidayProvider>, clock: Arc<dyn Clock>) -> Self {
        Self { provider, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn current_year(&self) -> i32 {
        self.today().year()
    }

    /// Public holidays of one calendar year
    pub async fn holidays_for_year(
        &self,
        year: i32,
        country_code: &str,
    ) -> ProviderResult<Vec<Holiday>> {
        self.provider.public_holidays(year, country_code).await
    }

    /// Public holidays of the server's current year
    pub async fn current_year_holidays(&self, country_code: &str) -> ProviderResult<Vec<Holiday>> {
        self.holidays_for_year(self.current_year(), country_code)
            .await
    }

    /// The holiday falling on the server's current date, if any
    pub async fn holiday_today(&self, country_code: &str) -> ProviderResult<Option<Holiday>> {
        let today = self.clock.today();
        let holidays = self.holidays_for_year(today.year(), country_code).await?;
        Ok(holidays.into_iter().find(|h| h.date == today))
    }

    /// Holidays between today and today + 30 days, sorted ascending by date.
    ///
    /// When the window crosses New Year both calendar years are fetched. A
    /// year that fails to load is logged and left out of the result.
    pub async fn holidays_in_next_30_days(&self, country_code: &str) -> Vec<Holiday> {
        let today = self.clock.today();
        self.holidays_between(today, today + Duration::days(UPCOMING_WINDOW_DAYS), country_code)
            .await
    }

    /// Holidays in `[start, end]`, sorted ascending by date. Every calendar
    /// year the window touches is fetched; failing years are skipped.
    pub async fn holidays_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        country_code: &str,
    ) -> Vec<Holiday> {
        let mut holidays = Vec::new();
        for year in start.year()..=end.year() {
            match self.provider.public_holidays(year, country_code).await {
                Ok(year_holidays) => holidays.extend(year_holidays),
                Err(e) => {
                    tracing::warn!(
                        "Error fetching holidays for year {} ({}): {}",
                        year,
                        country_code,
                        e
                    );
                }
            }
        }

        holidays.retain(|h| h.date >= start && h.date <= end);
        holidays.sort_by_key(|h| h.date);

        tracing::debug!(
            "{} holidays for {} between {} and {}",
            holidays.len(),
            country_code,
            start,
            end
        );

        holidays
    }
}
