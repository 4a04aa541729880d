use crate::domain::entities::Holiday;
use crate::domain::errors::ProviderResult;

/// Upstream public-holiday calendar
#[async_trait::async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Public holidays of one calendar year for an ISO 3166-1 alpha-2 country code
    async fn public_holidays(&self, year: i32, country_code: &str) -> ProviderResult<Vec<Holiday>>;
}
