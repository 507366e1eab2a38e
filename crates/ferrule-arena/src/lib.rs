//! Bump-pointer arena over a caller-supplied fixed buffer.
//!
//! [`Arena`] hands out aligned, zero-filled sub-regions of a borrowed byte
//! buffer in O(1) with no per-allocation metadata. Individual regions are
//! never freed; the whole arena is reset at once with [`Arena::clear`].
//!
//! # Architecture
//!
//! ```text
//! Arena<'buf>
//! ├── &'buf mut [u8]    (caller-owned, fixed capacity)
//! ├── offset            (bump cursor, padding included)
//! ├── Generation        (advanced by every clear)
//! └── ArenaConfig       (alignment, default 2 * pointer width)
//!
//! Region { generation, offset, len }  (handle resolved via get / get_mut)
//! ```
//!
//! Regions are plain index/length handles tagged with the generation that
//! issued them. Resolving a region issued before the last `clear` is denied
//! with [`ArenaError::StaleRegion`] instead of silently reading recycled
//! memory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;

pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::Region;
