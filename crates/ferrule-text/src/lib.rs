//! Fixed-capacity string builder with a minimal printf-style formatter.
//!
//! [`StringBuilder`] appends bytes, strings, integers and formatted text into
//! a caller-supplied buffer. It never allocates and never truncates: a write
//! that does not fit is rejected whole with [`TextError::CapacityExceeded`]
//! and the builder is left exactly as it was.
//!
//! The last byte of the buffer is reserved and never written, so the content
//! is always followed by a zero byte and can be handed to C-style consumers
//! via [`StringBuilder::as_bytes_with_nul`].
//!
//! # Formatting
//!
//! [`StringBuilder::format`] understands `%d`/`%i`, `%u`, `%c`, `%s` and
//! `%%`, each conversion consuming one [`Arg`] from an explicit list:
//!
//! ```
//! use ferrule_text::{sb_format, StringBuilder};
//!
//! let mut buf = [0u8; 32];
//! let mut sb = StringBuilder::new(&mut buf);
//! sb_format!(sb, "%s=%d,%u", "x", -5, 7).unwrap();
//! assert_eq!(sb.as_bytes(), b"x=-5,7");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod digits;
pub mod error;
pub mod format;

pub use builder::StringBuilder;
pub use error::TextError;
pub use format::{Arg, ArgKind};
