//! Error types for the Berlin clock domain.
//!
//! Shape and range failures share a single variant.

/// Errors raised while converting a time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The input is not an `HH:MM:SS` time between `00:00:00` and `24:59:59`.
    #[error("invalid time format: {input:?}")]
    InvalidTimeFormat {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl ClockError {
    pub(crate) fn invalid_time_format(input: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_rejected_input_quoted() {
        let err = ClockError::invalid_time_format("25:00:00");
        assert_eq!(err.to_string(), "invalid time format: \"25:00:00\"");
    }

    #[test]
    fn should_escape_control_characters_in_display() {
        let err = ClockError::invalid_time_format("12:00\n");
        assert_eq!(err.to_string(), "invalid time format: \"12:00\\n\"");
    }
}
