//! Ferrule: fixed-buffer memory and text utilities.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Ferrule sub-crates. Nothing in Ferrule allocates on its hot paths: every
//! structure borrows a buffer from its caller and fails cleanly when it is
//! full.
//!
//! # Quick start
//!
//! ```rust
//! use ferrule::prelude::*;
//!
//! let mut backing = [0u8; 256];
//! let mut arena = Arena::new(&mut backing);
//!
//! // Carve a line buffer out of the arena and format into it.
//! let line = arena.alloc_bytes(32).unwrap();
//! let mut sb = StringBuilder::new(line);
//! sb_format!(sb, "%s: %d items", "queue", 3).unwrap();
//! assert_eq!(sb.as_str().unwrap(), "queue: 3 items");
//!
//! // Everything carved so far is released at once.
//! arena.clear();
//! assert_eq!(arena.remaining(), 256);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `ferrule-arena` | Bump arena, regions, arena config |
//! | [`text`] | `ferrule-text` | String builder and printf-style formatting |
//! | [`io`] | `ferrule-io` | Byte cursors and the fixed-buffer file reader |
//! | [`common`] | `ferrule-core` | Generations, debug checks, terminal escapes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bump arena over a caller buffer (`ferrule-arena`).
///
/// [`arena::Arena`] hands out [`arena::Region`] handles that go stale on
/// [`arena::Arena::clear`].
pub use ferrule_arena as arena;

/// Fixed-capacity string building (`ferrule-text`).
///
/// [`text::StringBuilder`] with [`text::StringBuilder::format`] and the
/// [`sb_format!`] macro.
pub use ferrule_text as text;

/// Byte-level input (`ferrule-io`).
///
/// [`io::ByteCursor`] and [`io::FileCursor`] for positioned scanning,
/// [`io::FileReader`] for buffered reads into a borrowed buffer.
pub use ferrule_io as io;

/// Shared building blocks (`ferrule-core`).
///
/// Generation counters, the [`debug_check!`] macro, and ANSI escapes in
/// [`common::term`].
pub use ferrule_core as common;

pub use ferrule_core::debug_check;
pub use ferrule_text::sb_format;

/// Common imports for typical Ferrule usage.
///
/// ```rust
/// use ferrule::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use ferrule_arena::{Arena, ArenaConfig, ArenaError, Region};

    // Text
    pub use ferrule_text::{sb_format, Arg, StringBuilder, TextError};

    // Input
    pub use ferrule_io::{ByteCursor, FileCursor, FileReader, Position, Step};

    // Terminal
    pub use ferrule_core::term::{Color, Graphic};
}
