//! Strongly-typed identifiers.

use std::fmt;

/// Reset epoch of a bump allocator.
///
/// Every bulk reset of an arena advances its generation. Handles carry the
/// generation they were issued in, so a handle used after a reset can be
/// told apart from a live one in O(1) without any side table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u32);

impl Generation {
    /// The generation of a freshly constructed arena.
    pub const INITIAL: Self = Self(0);

    /// The generation that follows this one.
    ///
    /// Wraps on overflow. A handle would have to survive 2^32 resets to
    /// alias a live generation.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Generation {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
