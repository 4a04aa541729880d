use crate::application::services::{ContactAvailabilityService, HolidayService};
use crate::config::Config;
use crate::domain::ports::{Clock, HolidayProvider, TimezoneProvider};
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::providers::{AbstractTimezoneClient, NagerDateClient};
use crate::infrastructure::runtime::SystemClock;
use std::sync::Arc;

/// Wire the upstream clients and services into the shared handler state
pub fn build_app_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    // One pooled HTTP client shared by both providers
    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;
    tracing::info!(
        "HTTP client initialized with {}s timeout",
        config.http_timeout.as_secs()
    );

    let timezone_client = AbstractTimezoneClient::new(
        http_client.clone(),
        config.abstract_timezone_api_key.clone(),
        config.abstract_timezone_base_url.clone(),
    );
    if !timezone_client.has_api_key() {
        tracing::warn!(
            "ABSTRACT_TIMEZONE_API_KEY is not set; timezone lookups will fail until it is configured"
        );
    }
    let timezone_provider = Arc::new(timezone_client) as Arc<dyn TimezoneProvider>;
    tracing::info!(
        "Timezone provider initialized ({})",
        config.abstract_timezone_base_url
    );

    let holiday_provider = Arc::new(NagerDateClient::new(
        http_client,
        config.nager_date_base_url.clone(),
    )) as Arc<dyn HolidayProvider>;
    tracing::info!("Holiday provider initialized ({})", config.nager_date_base_url);

    Ok(assemble_state(
        timezone_provider,
        holiday_provider,
        Arc::new(SystemClock::new()),
    ))
}

/// Build handler state from already-constructed ports
pub fn assemble_state(
    timezone_provider: Arc<dyn TimezoneProvider>,
    holiday_provider: Arc<dyn HolidayProvider>,
    clock: Arc<dyn Clock>,
) -> AppState {
    let holiday_service = HolidayService::new(holiday_provider, clock);
    let contact_availability_service =
        ContactAvailabilityService::new(timezone_provider.clone(), holiday_service.clone());

    AppState {
        timezone_provider,
        holiday_service,
        contact_availability_service,
    }
}
