//! Byte-level input for Ferrule.
//!
//! Two families of readers live here:
//!
//! - **Cursors** ([`ByteCursor`], [`FileCursor`]) hand out one byte at a time
//!   together with the [`Position`] it was read at, for scanners and parsers
//!   that report line and column.
//! - **[`FileReader`]** is a buffered reader over any `Read + Seek` source
//!   whose buffer is supplied by the caller, so reading never allocates.
//!
//! ```
//! use ferrule_io::ByteCursor;
//!
//! let mut cursor = ByteCursor::from("a\nb");
//! let lines: Vec<u64> = cursor.by_ref().map(|(pos, _)| pos.line).collect();
//! assert_eq!(lines, [1, 1, 2]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod file_cursor;
pub mod position;
pub mod reader;

pub use cursor::{ByteCursor, Step};
pub use file_cursor::FileCursor;
pub use position::Position;
pub use reader::FileReader;

use std::io::{self, Read};

/// Read a single byte, retrying on `Interrupted`. `Ok(None)` is end of input.
pub(crate) fn read_one<R: Read + ?Sized>(r: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match r.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
