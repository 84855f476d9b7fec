//! Clock face: the five tiers of a Berlin clock derived from a time.
//!
//! | line | lamps | meaning |
//! |------|-------|---------|
//! | 1 | 1 | seconds parity, yellow on even seconds |
//! | 2 | 4 | five-hour blocks, red |
//! | 3 | 4 | single hours, red |
//! | 4 | 11 | five-minute blocks, yellow with red quarter marks |
//! | 5 | 4 | single minutes, yellow |

use std::fmt;

use serde::{Serialize, Serializer};

use crate::lamp::Lamp;
use crate::row::LampRow;
use crate::time::TimeOfDay;

/// Every third lamp of the five-minute row marks a quarter hour.
const QUARTER_MARK_EVERY: usize = 3;

/// A fully derived Berlin clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockFace {
    #[serde(serialize_with = "serialize_as_char")]
    pub seconds: Lamp,
    pub five_hours: LampRow<4>,
    pub single_hours: LampRow<4>,
    pub five_minutes: LampRow<11>,
    pub single_minutes: LampRow<4>,
}

impl ClockFace {
    /// Derive the lamp states for `time`.
    #[must_use]
    pub fn from_time(time: TimeOfDay) -> Self {
        let hours = usize::from(time.hours());
        let minutes = usize::from(time.minutes());

        let seconds = if time.seconds() % 2 == 0 {
            Lamp::Yellow
        } else {
            Lamp::Off
        };

        Self {
            seconds,
            five_hours: LampRow::filled(hours / 5, Lamp::Red),
            single_hours: LampRow::filled(hours % 5, Lamp::Red),
            five_minutes: LampRow::filled_with(minutes / 5, |pos| {
                if pos % QUARTER_MARK_EVERY == 0 {
                    Lamp::Red
                } else {
                    Lamp::Yellow
                }
            }),
            single_minutes: LampRow::filled(minutes % 5, Lamp::Yellow),
        }
    }

    /// Rendered rows in display order, top lamp first.
    #[must_use]
    pub fn lines(&self) -> [String; 5] {
        [
            self.seconds.to_string(),
            self.five_hours.to_string(),
            self.single_hours.to_string(),
            self.five_minutes.to_string(),
            self.single_minutes.to_string(),
        ]
    }
}

fn serialize_as_char<S: Serializer>(lamp: &Lamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(lamp)
}

impl From<TimeOfDay> for ClockFace {
    fn from(time: TimeOfDay) -> Self {
        Self::from_time(time)
    }
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(hours: u8, minutes: u8, seconds: u8) -> ClockFace {
        ClockFace::from_time(TimeOfDay::new(hours, minutes, seconds).unwrap())
    }

    #[test]
    fn should_light_seconds_lamp_on_even_seconds() {
        assert_eq!(face(0, 0, 0).seconds, Lamp::Yellow);
        assert_eq!(face(0, 0, 58).seconds, Lamp::Yellow);
        assert_eq!(face(0, 0, 59).seconds, Lamp::Off);
    }

    #[test]
    fn should_leave_every_row_off_at_midnight() {
        let face = face(0, 0, 0);
        assert_eq!(face.five_hours.lit_count(), 0);
        assert_eq!(face.single_hours.lit_count(), 0);
        assert_eq!(face.five_minutes.lit_count(), 0);
        assert_eq!(face.single_minutes.lit_count(), 0);
    }

    #[test]
    fn should_split_hours_into_blocks_of_five() {
        let face = face(19, 0, 0);
        assert_eq!(face.five_hours.to_string(), "RRRO");
        assert_eq!(face.single_hours.to_string(), "RRRR");
    }

    #[test]
    fn should_fill_five_hour_row_exactly_at_hour_twenty_four() {
        let face = face(24, 0, 0);
        assert_eq!(face.five_hours.to_string(), "RRRR");
        assert_eq!(face.single_hours.to_string(), "RRRR");
    }

    #[test]
    fn should_mark_quarters_red_in_five_minute_row() {
        assert_eq!(face(0, 15, 0).five_minutes.to_string(), "YYROOOOOOOO");
        assert_eq!(face(0, 30, 0).five_minutes.to_string(), "YYRYYROOOOO");
        assert_eq!(face(0, 45, 0).five_minutes.to_string(), "YYRYYRYYROO");
        assert_eq!(face(0, 55, 0).five_minutes.to_string(), "YYRYYRYYRYY");
    }

    #[test]
    fn should_count_single_minutes_modulo_five() {
        assert_eq!(face(0, 4, 0).single_minutes.to_string(), "YYYY");
        assert_eq!(face(0, 5, 0).single_minutes.to_string(), "OOOO");
        assert_eq!(face(0, 5, 0).five_minutes.lit_count(), 1);
        assert_eq!(face(0, 58, 0).single_minutes.to_string(), "YYYO");
    }

    #[test]
    fn should_render_lines_in_display_order() {
        let face = face(13, 17, 1);
        assert_eq!(face.lines(), ["O", "RROO", "RRRO", "YYROOOOOOOO", "YYOO"]);
        assert_eq!(face.to_string(), "O\nRROO\nRRRO\nYYROOOOOOOO\nYYOO");
    }

    #[test]
    fn should_serialize_rows_as_strings() {
        let json = serde_json::to_value(face(13, 17, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "seconds": "O",
                "five_hours": "RROO",
                "single_hours": "RRRO",
                "five_minutes": "YYROOOOOOOO",
                "single_minutes": "YYOO",
            })
        );
    }
}
