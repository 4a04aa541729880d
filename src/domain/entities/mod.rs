pub mod availability;
pub mod holiday;
pub mod timezone;

pub use availability::*;
pub use holiday::*;
pub use timezone::*;
