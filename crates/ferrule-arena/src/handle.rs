//! Region handles.
//!
//! A [`Region`] records where an allocation lives inside the arena's buffer.
//! It is generation-scoped: the `generation` field allows an O(1) staleness
//! check after the arena has been cleared.

use std::fmt;
use std::ops::Range;

use ferrule_core::Generation;

/// Location of an allocation within an [`Arena`](crate::Arena).
///
/// Regions are `Copy` index/length pairs, not borrows, so several can be
/// held at once. Resolve them with [`Arena::get`](crate::Arena::get) or
/// [`Arena::get_mut`](crate::Arena::get_mut).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Region {
    pub(crate) generation: Generation,
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl Region {
    pub(crate) fn new(generation: Generation, offset: usize, len: usize) -> Self {
        Self {
            generation,
            offset,
            len,
        }
    }

    /// The arena generation this region was issued in.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Byte offset of the region within the arena's buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the region in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length region.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the region.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The byte range covered within the buffer.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Whether the two regions share at least one byte.
    pub fn overlaps(&self, other: &Region) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.offset < other.end()
            && other.offset < self.end()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Region(gen={}, off={}, len={})",
            self.generation, self.offset, self.len
        )
    }
}
