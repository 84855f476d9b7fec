//! Conversion port: the single operation callers invoke.

use berlin_clock_domain::error::ClockError;

/// Turns a wall-clock time string into its Berlin clock rendering.
pub trait TimeConverter {
    /// Convert `time` (`HH:MM:SS`) into five `\n`-joined lamp rows.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidTimeFormat`] when `time` is malformed or
    /// out of range.
    fn convert_time(&self, time: &str) -> Result<String, ClockError>;
}
