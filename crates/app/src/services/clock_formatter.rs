//! Clock formatter: validates time strings and renders Berlin clock faces.

use berlin_clock_domain::error::ClockError;
use berlin_clock_domain::face::ClockFace;
use berlin_clock_domain::time::TimeOfDay;

use crate::ports::{SystemTimeSource, TimeConverter, TimeSource};

/// Application service for Berlin clock conversion.
///
/// Stateless apart from the injected time source; every call builds a fresh
/// [`ClockFace`].
#[derive(Debug, Clone, Default)]
pub struct ClockFormatter<T = SystemTimeSource> {
    source: T,
}

impl<T: TimeSource> ClockFormatter<T> {
    /// Create a formatter reading "now" from `source`.
    pub fn new(source: T) -> Self {
        Self { source }
    }

    /// Validate `time` and derive its clock face.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidTimeFormat`] when `time` is malformed or
    /// out of range.
    #[tracing::instrument(skip(self))]
    pub fn clock_face(&self, time: &str) -> Result<ClockFace, ClockError> {
        let parsed = time.parse::<TimeOfDay>().inspect_err(|err| {
            tracing::debug!(%err, "rejected time input");
        })?;
        Ok(ClockFace::from_time(parsed))
    }

    /// Current time from the injected source, with its clock face.
    #[must_use]
    #[tracing::instrument(skip(self))]
    pub fn current(&self) -> (TimeOfDay, ClockFace) {
        let now = self.source.now();
        tracing::trace!(%now, "read current time");
        (now, ClockFace::from_time(now))
    }
}

impl<T: TimeSource> TimeConverter for ClockFormatter<T> {
    fn convert_time(&self, time: &str) -> Result<String, ClockError> {
        self.clock_face(time).map(|face| face.to_string())
    }
}
