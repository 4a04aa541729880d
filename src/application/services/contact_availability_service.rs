use crate::application::services::{HolidayService, UPCOMING_WINDOW_DAYS};
use crate::domain::entities::{ContactAvailabilityResponse, HolidayDates, LocalMoment};
use crate::domain::ports::TimezoneProvider;
use crate::domain::services::{classify, country_codes, formatter};
use crate::infrastructure::http::middleware::{ApiError, ApiResult};
use chrono::Duration;
use serde::Deserialize;
use std::sync::Arc;

/// How many supported country names to suggest when a country is unknown
const COUNTRY_SUGGESTIONS: usize = 10;

/// Location fields of a contact record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactLocationQuery {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone)]
pub struct ContactAvailabilityService {
    timezone_provider: Arc<dyn TimezoneProvider>,
    holiday_service: HolidayService,
}

impl ContactAvailabilityService {
    pub fn new(timezone_provider: Arc<dyn TimezoneProvider>, holiday_service: HolidayService) -> Self {
        Self {
            timezone_provider,
            holiday_service,
        }
    }

    /// Work out whether a contact can be called right now
    pub async fn check(&self, query: &ContactLocationQuery) -> ApiResult<ContactAvailabilityResponse> {
        let (city, country) = match (non_empty(&query.city), non_empty(&query.country)) {
            (Some(city), Some(country)) => (city, country),
            _ => {
                return Err(ApiError::BadRequest(
                    "City and country parameters are required. Use ?city=Boston&state=MA&country=United States"
                        .to_string(),
                ))
            }
        };

        let country_code = country_codes::resolve(country).ok_or_else(|| {
            let examples: Vec<&str> = country_codes::supported_countries()
                .take(COUNTRY_SUGGESTIONS)
                .collect();
            ApiError::BadRequest(format!(
                "Unsupported country: \"{}\". Please use a valid country name like: {}",
                country,
                examples.join(", ")
            ))
        })?;

        let location = build_location(city, non_empty(&query.state), country);
        tracing::debug!("Checking availability for {} ({})", location, country_code);

        // A contact's local date is at most one day off the server's UTC date
        let today = self.holiday_service.today();
        let (timezone, mut holidays) = tokio::join!(
            self.timezone_provider.current_time(&location),
            self.holiday_service.holidays_between(
                today - Duration::days(1),
                today + Duration::days(UPCOMING_WINDOW_DAYS + 1),
                country_code
            )
        );
        let timezone = timezone?;

        let moment = LocalMoment::from_timezone(&timezone)?;
        let holiday_dates: HolidayDates = holidays.iter().collect();
        let availability = classify(&moment, &holiday_dates);

        let window_end = moment.date + Duration::days(UPCOMING_WINDOW_DAYS);
        holidays.retain(|h| h.date >= moment.date && h.date <= window_end);

        tracing::info!(
            "Contact in {} on {} is {} ({})",
            location,
            formatter::format_date_time(&timezone)?,
            availability.status,
            availability.recommendation
        );

        Ok(ContactAvailabilityResponse {
            datetime: formatter::local_date_time_display(&timezone)?,
            availability,
            holidays,
        })
    }
}

/// `city[,state],country` as understood by the timezone provider
pub fn build_location(city: &str, state: Option<&str>, country: &str) -> String {
    let mut parts = vec![city];
    if let Some(state) = state {
        parts.push(state);
    }
    parts.push(country);
    parts.join(",")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
