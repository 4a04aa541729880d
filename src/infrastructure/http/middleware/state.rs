use crate::application::services::{ContactAvailabilityService, HolidayService};
use crate::domain::ports::TimezoneProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub timezone_provider: Arc<dyn TimezoneProvider>,
    pub holiday_service: HolidayService,
    pub contact_availability_service: ContactAvailabilityService,
}
