//! Port definitions: traits at the boundary of the application core.

pub mod converter;
pub mod time_source;

pub use converter::TimeConverter;
pub use time_source::{SystemTimeSource, TimeSource};
