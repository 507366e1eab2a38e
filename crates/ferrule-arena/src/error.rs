//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use ferrule_core::Generation;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Not enough room left after aligning the cursor.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
        /// Where the region would have started.
        aligned_offset: usize,
        /// Total size of the backing buffer.
        capacity: usize,
    },
    /// A [`Region`](crate::Region) issued before the last `clear`.
    StaleRegion {
        /// The generation encoded in the region.
        region_generation: Generation,
        /// The arena's current generation.
        current_generation: Generation,
    },
    /// A region that does not fit this arena's buffer, typically one issued
    /// by a different arena.
    OutOfBounds {
        /// One past the region's last byte.
        region_end: usize,
        /// Total size of the backing buffer.
        capacity: usize,
    },
    /// Configured alignment is not a non-zero power of two.
    InvalidAlignment {
        /// The rejected alignment.
        alignment: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                aligned_offset,
                capacity,
            } => {
                write!(
                    f,
                    "arena out of memory: requested {requested} bytes at offset {aligned_offset}, capacity {capacity} bytes"
                )
            }
            Self::StaleRegion {
                region_generation,
                current_generation,
            } => {
                write!(
                    f,
                    "stale region: generation {region_generation}, arena at generation {current_generation}"
                )
            }
            Self::OutOfBounds {
                region_end,
                capacity,
            } => {
                write!(
                    f,
                    "region ends at byte {region_end}, past arena capacity {capacity}"
                )
            }
            Self::InvalidAlignment { alignment } => {
                write!(f, "alignment {alignment} is not a power of two")
            }
        }
    }
}

impl Error for ArenaError {}
