use crate::domain::entities::TimezoneInfo;
use crate::domain::errors::ProviderResult;

/// Upstream current-time lookup
#[async_trait::async_trait]
pub trait TimezoneProvider: Send + Sync {
    /// Current local time for free-text location ("City,State,Country"),
    /// "lat,lon" coordinates or an IP address, passed through verbatim
    async fn current_time(&self, location: &str) -> ProviderResult<TimezoneInfo>;

    async fn current_time_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> ProviderResult<TimezoneInfo> {
        self.current_time(&format!("{},{}", latitude, longitude))
            .await
    }

    async fn current_time_by_ip(&self, ip_address: &str) -> ProviderResult<TimezoneInfo> {
        self.current_time(ip_address).await
    }
}
