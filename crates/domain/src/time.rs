//! Time-of-day value parsed from `HH:MM:SS` input.
//!
//! Validation runs in two phases: a structural pattern check (two ASCII
//! digits per field, minutes and seconds in `00`–`59`, hours in `00`–`29`)
//! followed by a numeric range check that bounds hours to `24`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Local, NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ClockError;

/// Highest hour value a Berlin clock can display (`24:00:00`).
pub const MAX_HOURS: u8 = 24;

const MAX_MINUTES: u8 = 59;
const MAX_SECONDS: u8 = 59;

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-2][0-9]):([0-5][0-9]):([0-5][0-9])$")
        .expect("time pattern is a valid regex")
});

/// A validated wall-clock time, `00:00:00` through `24:59:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    /// Build a time from numeric parts, enforcing the range bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidTimeFormat`] when `hours > 24`,
    /// `minutes > 59` or `seconds > 59`.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, ClockError> {
        if hours > MAX_HOURS || minutes > MAX_MINUTES || seconds > MAX_SECONDS {
            return Err(ClockError::invalid_time_format(format!(
                "{hours:02}:{minutes:02}:{seconds:02}"
            )));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Current local wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Local::now().time())
    }

    #[must_use]
    pub fn hours(self) -> u8 {
        self.hours
    }

    #[must_use]
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub fn seconds(self) -> u8 {
        self.seconds
    }
}

/// Split `input` into its three numeric fields when it has the `HH:MM:SS`
/// shape. No range check beyond what the pattern encodes.
fn match_shape(input: &str) -> Option<(u8, u8, u8)> {
    let caps = TIME_PATTERN.captures(input)?;
    let field = |idx: usize| caps.get(idx)?.as_str().parse::<u8>().ok();
    Some((field(1)?, field(2)?, field(3)?))
}

impl FromStr for TimeOfDay {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes, seconds) =
            match_shape(s).ok_or_else(|| ClockError::invalid_time_format(s))?;
        Self::new(hours, minutes, seconds).map_err(|_| ClockError::invalid_time_format(s))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Truncates sub-second precision; chrono already folds a leap second into `:59`.
impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        let narrow = |value: u32| u8::try_from(value).unwrap_or(u8::MAX);
        Self {
            hours: narrow(time.hour()),
            minutes: narrow(time.minute()),
            seconds: narrow(time.second()),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
