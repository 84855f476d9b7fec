//! Application services: use-case implementations.
//!
//! Services accept port implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from callers.

pub mod clock_formatter;

pub use clock_formatter::ClockFormatter;
