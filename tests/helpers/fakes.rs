use chrono::NaiveDate;
use contact_availability::bootstrap::assemble_state;
use contact_availability::domain::entities::{Holiday, TimezoneInfo};
use contact_availability::domain::errors::{ProviderError, ProviderResult};
use contact_availability::domain::ports::{Clock, HolidayProvider, TimezoneProvider};
use contact_availability::infrastructure::http::middleware::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Holiday calendar keyed by year; years listed in `failing` answer 503
#[derive(Default)]
pub struct FakeHolidayProvider {
    by_year: HashMap<i32, Vec<Holiday>>,
    failing: Vec<i32>,
    calls: Mutex<Vec<(i32, String)>>,
}

impl FakeHolidayProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i32, holidays: Vec<Holiday>) -> Self {
        self.by_year.insert(year, holidays);
        self
    }

    pub fn failing_year(mut self, year: i32) -> Self {
        self.failing.push(year);
        self
    }

    pub fn requested_years(&self) -> Vec<i32> {
        self.calls.lock().unwrap().iter().map(|(y, _)| *y).collect()
    }

    pub fn requested_codes(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, c)| c.clone()).collect()
    }
}

#[async_trait::async_trait]
impl HolidayProvider for FakeHolidayProvider {
    async fn public_holidays(&self, year: i32, country_code: &str) -> ProviderResult<Vec<Holiday>> {
        self.calls
            .lock()
            .unwrap()
            .push((year, country_code.to_string()));

        if self.failing.contains(&year) {
            return Err(ProviderError::Upstream {
                context: "Failed to fetch public holidays".to_string(),
                status: 503,
                message: "HTTP error! status: 503".to_string(),
            });
        }
        Ok(self.by_year.get(&year).cloned().unwrap_or_default())
    }
}

/// Timezone lookup answering every location with the same payload
pub struct FakeTimezoneProvider {
    response: Option<TimezoneInfo>,
    locations: Mutex<Vec<String>>,
}

impl FakeTimezoneProvider {
    pub fn answering(info: TimezoneInfo) -> Self {
        Self {
            response: Some(info),
            locations: Mutex::new(Vec::new()),
        }
    }

    /// Every lookup fails as if the upstream rejected the API key
    pub fn rejecting() -> Self {
        Self {
            response: None,
            locations: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_locations(&self) -> Vec<String> {
        self.locations.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TimezoneProvider for FakeTimezoneProvider {
    async fn current_time(&self, location: &str) -> ProviderResult<TimezoneInfo> {
        self.locations.lock().unwrap().push(location.to_string());
        match &self.response {
            Some(info) => Ok(info.clone()),
            None => Err(ProviderError::Upstream {
                context: format!("Failed to get current time for {}", location),
                status: 401,
                message: "API Error: Invalid API key provided.".to_string(),
            }),
        }
    }
}

pub fn test_state(
    timezone: Arc<FakeTimezoneProvider>,
    holidays: Arc<FakeHolidayProvider>,
    today: NaiveDate,
) -> AppState {
    assemble_state(timezone, holidays, Arc::new(FixedClock(today)))
}
