//! # berlin-clock-domain
//!
//! Pure domain model for the Berlin clock ("Mengenlehreuhr").
//!
//! ## Responsibilities
//! - Validate wall-clock time strings into a [`TimeOfDay`](time::TimeOfDay)
//! - Define **Lamps** (off, red, yellow) and fixed-width **Lamp rows**
//! - Derive the five-tier [`ClockFace`](face::ClockFace) from a time value
//! - Render the face to its canonical `O`/`R`/`Y` text form
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Callers (services, CLI) live in the `app` and `bin` crates.

pub mod error;
pub mod time;

pub mod face;
pub mod lamp;
pub mod row;

use crate::error::ClockError;
use crate::face::ClockFace;
use crate::time::TimeOfDay;

/// Convert an `HH:MM:SS` string into its rendered Berlin clock text.
///
/// The output holds five `\n`-separated lines of widths 1, 4, 4, 11 and 4.
///
/// # Errors
///
/// Returns [`ClockError::InvalidTimeFormat`] when `input` is not a valid time.
pub fn convert_time(input: &str) -> Result<String, ClockError> {
    let time: TimeOfDay = input.parse()?;
    Ok(ClockFace::from_time(time).to_string())
}
