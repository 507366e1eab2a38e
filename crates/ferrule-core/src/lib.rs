//! Core types for the Ferrule runtime substrate.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces shared by the arena, the string builder and the byte cursors:
//! generation identifiers, the debug-check facility used for programmer
//! errors, and terminal escape sequences.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod check;
pub mod id;
pub mod term;

pub use id::Generation;
