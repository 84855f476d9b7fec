//! Lamp: a single indicator on the clock face.

/// Display state of a single lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lamp {
    #[default]
    Off,
    Red,
    Yellow,
}

impl Lamp {
    /// Whether the lamp is lit (anything but [`Off`](Self::Off)).
    #[must_use]
    pub fn is_lit(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Character used in the text rendering.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Off => 'O',
            Self::Red => 'R',
            Self::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Lamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;

        f.write_char(self.as_char())
    }
}
