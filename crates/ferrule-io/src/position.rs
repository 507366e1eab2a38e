//! Source positions.

use std::fmt;

/// Where a byte sits in its input: byte offset plus 1-based line and column.
///
/// Columns count bytes, not characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Bytes consumed before this position.
    pub offset: u64,
    /// 1-based line number.
    pub line: u64,
    /// 1-based column within the line.
    pub column: u64,
}

impl Position {
    /// The start of any input.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// The position following `byte`. A newline starts the next line.
    pub fn advance(self, byte: u8) -> Self {
        if byte == b'\n' {
            Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                offset: self.offset + 1,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
