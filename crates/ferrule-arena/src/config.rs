//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for the arena allocator.
///
/// Validated at construction; immutable for the arena's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Alignment, in bytes, of every region's absolute start address.
    ///
    /// Default: `2 * size_of::<usize>()` (16 on 64-bit targets).
    /// Must be a non-zero power of two.
    pub alignment: usize,
}

impl ArenaConfig {
    /// Default alignment: two pointer widths.
    pub const DEFAULT_ALIGNMENT: usize = 2 * std::mem::size_of::<usize>();

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            alignment: Self::DEFAULT_ALIGNMENT,
        }
    }

    /// Replace the alignment.
    pub const fn with_alignment(mut self, alignment: usize) -> Self {
        self.alignment = alignment;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if !self.alignment.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment {
                alignment: self.alignment,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
