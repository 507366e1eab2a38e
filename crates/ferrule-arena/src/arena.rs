//! The bump allocator.

use ferrule_core::{debug_check, Generation};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::Region;

/// Round `address` up to the next multiple of `alignment`.
///
/// Returns `None` if `alignment` is not a power of two (zero included) or
/// if the rounded address does not fit in a `usize`.
pub fn align_forward(address: usize, alignment: usize) -> Option<usize> {
    if !alignment.is_power_of_two() {
        return None;
    }
    let modulo = address & (alignment - 1);
    if modulo == 0 {
        return Some(address);
    }
    address.checked_add(alignment - modulo)
}

/// Bump allocator over a caller-owned byte buffer.
///
/// The arena never allocates; it carves aligned, zero-filled regions out of
/// the borrowed buffer and advances a cursor. Padding skipped to reach an
/// aligned start is forfeited until the next [`clear`](Arena::clear).
///
/// The arena is single-owner: it holds the buffer mutably for `'buf`, so the
/// buffer cannot be freed, moved or touched elsewhere while the arena lives.
///
/// # Invalidation
///
/// `clear` invalidates every region issued so far. Regions are tagged with
/// the arena's [`Generation`]; resolving an old one fails with
/// [`ArenaError::StaleRegion`].
pub struct Arena<'buf> {
    buffer: &'buf mut [u8],
    /// Bump pointer: bytes consumed so far, padding included.
    offset: usize,
    generation: Generation,
    alignment: usize,
}

impl<'buf> Arena<'buf> {
    /// Create an arena over `buffer` with the default configuration.
    ///
    /// The buffer is not zeroed; every region is zeroed when it is handed out.
    /// An empty buffer is a programmer error caught by a debug check; in
    /// release builds such an arena simply fails every non-trivial request.
    pub fn new(buffer: &'buf mut [u8]) -> Self {
        debug_check!(!buffer.is_empty(), "arena buffer must not be empty");
        Self {
            buffer,
            offset: 0,
            generation: Generation::INITIAL,
            alignment: ArenaConfig::DEFAULT_ALIGNMENT,
        }
    }

    /// Create an arena with an explicit configuration.
    pub fn with_config(buffer: &'buf mut [u8], config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut arena = Self::new(buffer);
        arena.alignment = config.alignment;
        Ok(arena)
    }

    /// Allocate `size` zeroed bytes and return a handle to them.
    ///
    /// Fails with [`ArenaError::OutOfMemory`] if the aligned start plus
    /// `size` exceeds the capacity; nothing changes in that case. A
    /// zero-size request succeeds with an empty region.
    pub fn alloc(&mut self, size: usize) -> Result<Region, ArenaError> {
        let start = self.reserve(size)?;
        Ok(Region::new(self.generation, start, size))
    }

    /// Allocate `size` zeroed bytes and borrow them directly.
    ///
    /// Same rules as [`alloc`](Arena::alloc). The returned slice keeps the
    /// arena mutably borrowed; use `alloc` to hold several regions at once.
    pub fn alloc_bytes(&mut self, size: usize) -> Result<&mut [u8], ArenaError> {
        let start = self.reserve(size)?;
        Ok(&mut self.buffer[start..start + size])
    }

    fn reserve(&mut self, size: usize) -> Result<usize, ArenaError> {
        let capacity = self.buffer.len();
        let aligned = self.aligned_offset();
        let end = aligned.and_then(|start| start.checked_add(size));

        match (aligned, end) {
            (Some(start), Some(end)) if end <= capacity => {
                self.buffer[start..end].fill(0);
                self.offset = end;
                tracing::trace!(
                    offset = start,
                    size,
                    generation = self.generation.0,
                    "arena alloc"
                );
                Ok(start)
            }
            _ => {
                let aligned_offset = aligned.unwrap_or(usize::MAX);
                tracing::debug!(
                    requested = size,
                    aligned_offset,
                    capacity,
                    "arena out of memory"
                );
                Err(ArenaError::OutOfMemory {
                    requested: size,
                    aligned_offset,
                    capacity,
                })
            }
        }
    }

    /// Offset where the next allocation would start.
    ///
    /// Alignment applies to the absolute address (buffer base + cursor), so
    /// a buffer whose base is not itself aligned pays padding up front.
    fn aligned_offset(&self) -> Option<usize> {
        let base = self.buffer.as_ptr() as usize;
        let address = base.checked_add(self.offset)?;
        Some(align_forward(address, self.alignment)? - base)
    }

    /// Resolve a region to its bytes.
    pub fn get(&self, region: Region) -> Result<&[u8], ArenaError> {
        self.check_region(region)?;
        Ok(&self.buffer[region.range()])
    }

    /// Resolve a region to its bytes, mutably.
    pub fn get_mut(&mut self, region: Region) -> Result<&mut [u8], ArenaError> {
        self.check_region(region)?;
        Ok(&mut self.buffer[region.range()])
    }

    fn check_region(&self, region: Region) -> Result<(), ArenaError> {
        if region.generation != self.generation {
            tracing::warn!(
                region_generation = region.generation.0,
                current_generation = self.generation.0,
                "stale arena region resolved"
            );
            return Err(ArenaError::StaleRegion {
                region_generation: region.generation,
                current_generation: self.generation,
            });
        }
        let capacity = self.buffer.len();
        match region.offset.checked_add(region.len) {
            Some(end) if end <= capacity => Ok(()),
            end => Err(ArenaError::OutOfBounds {
                region_end: end.unwrap_or(usize::MAX),
                capacity,
            }),
        }
    }

    /// Whether `region` was issued before the last [`clear`](Arena::clear).
    pub fn is_stale(&self, region: Region) -> bool {
        region.generation != self.generation
    }

    /// Zero the whole buffer, rewind the cursor and start a new generation.
    ///
    /// Every previously issued region becomes stale.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
        self.offset = 0;
        self.generation = self.generation.next();
        tracing::debug!(generation = self.generation.0, "arena cleared");
    }

    /// Total size of the backing buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes consumed so far, alignment padding included.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes after the cursor, before any alignment padding.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Current generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Alignment applied to every region.
    pub fn alignment(&self) -> usize {
        self.alignment
    }
}
