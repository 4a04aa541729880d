pub mod clock;
pub mod holiday_provider;
pub mod timezone_provider;

pub use clock::*;
pub use holiday_provider::*;
pub use timezone_provider::*;
