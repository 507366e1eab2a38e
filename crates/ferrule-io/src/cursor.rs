//! Position-tracking cursor over an in-memory byte slice.

use crate::position::Position;

/// One cursor read: the position of the byte, and the byte itself.
///
/// `byte` is `None` at end of input; `position` is then where the next byte
/// would have been.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Position of `byte` in the input.
    pub position: Position,
    /// The byte read, or `None` at end of input.
    pub byte: Option<u8>,
}

impl Step {
    /// Whether the read hit end of input.
    pub fn is_end(&self) -> bool {
        self.byte.is_none()
    }
}

/// Walks a byte slice one byte at a time, tracking line and column.
///
/// Also an [`Iterator`] over `(Position, u8)` pairs.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
    position: Position,
}

impl<'a> ByteCursor<'a> {
    /// Cursor at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            position: Position::START,
        }
    }

    /// Consume the next byte.
    pub fn next_step(&mut self) -> Step {
        let step = self.peek();
        if let Some(byte) = step.byte {
            self.offset += 1;
            self.position = self.position.advance(byte);
        }
        step
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> Step {
        Step {
            position: self.position,
            byte: self.bytes.get(self.offset).copied(),
        }
    }

    /// Position of the next byte.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The unread tail of the input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    /// Whether every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.offset == self.bytes.len()
    }
}

impl<'a> From<&'a [u8]> for ByteCursor<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for ByteCursor<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl Iterator for ByteCursor<'_> {
    type Item = (Position, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.next_step();
        step.byte.map(|byte| (step.position, byte))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bytes.len() - self.offset;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ByteCursor<'_> {}
