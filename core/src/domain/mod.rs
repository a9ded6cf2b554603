//! Domain layer containing business entities and the time source they are evaluated against.

pub mod clock;
pub mod entities;

// Re-export commonly used domain types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::*;
