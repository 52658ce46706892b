//! Generation counter used to discard late results.
//!
//! Every route fetch and every armed tick source is stamped with the
//! controller's current `Generation`.  `start` and `reset` advance it, so an
//! event carrying an older generation belongs to a superseded run and is
//! dropped on arrival.

use std::fmt;

/// Monotonically increasing run tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

impl Generation {
    pub const ZERO: Generation = Generation(0);

    /// The generation after `self`.
    #[inline]
    pub fn next(self) -> Generation {
        Generation(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}
