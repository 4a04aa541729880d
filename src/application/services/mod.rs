pub mod contact_availability_service;
pub mod holiday_service;

pub use contact_availability_service::*;
pub use holiday_service::*;
