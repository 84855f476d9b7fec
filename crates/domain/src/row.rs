//! Fixed-width row of lamps, filled from the left.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::lamp::Lamp;

/// An ordered row of `N` lamps.
///
/// Rows are built from an all-off baseline; lit lamps always occupy the
/// leftmost positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LampRow<const N: usize>([Lamp; N]);

impl<const N: usize> Default for LampRow<N> {
    fn default() -> Self {
        Self([Lamp::Off; N])
    }
}

impl<const N: usize> LampRow<N> {
    /// Light the first `lit` lamps with `color`. Counts above `N` saturate.
    #[must_use]
    pub fn filled(lit: usize, color: Lamp) -> Self {
        Self::filled_with(lit, |_| color)
    }

    /// Light the first `lit` lamps, choosing each colour from its 1-based
    /// position.
    #[must_use]
    pub fn filled_with(lit: usize, color: impl Fn(usize) -> Lamp) -> Self {
        let mut lamps = [Lamp::Off; N];
        for (idx, lamp) in lamps.iter_mut().take(lit).enumerate() {
            *lamp = color(idx + 1);
        }
        Self(lamps)
    }

    /// Number of lamps that are not [`Lamp::Off`].
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|lamp| lamp.is_lit()).count()
    }
}

impl<const N: usize> fmt::Display for LampRow<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|lamp| fmt::Display::fmt(lamp, f))
    }
}

impl<const N: usize> Serialize for LampRow<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
