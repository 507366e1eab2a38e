//! Position-tracking cursor over a seekable stream.

use std::io::{self, Read, Seek, SeekFrom};

use crate::cursor::Step;
use crate::position::Position;
use crate::read_one;

/// Reads a stream one byte at a time, tracking line and column.
///
/// Each step is a separate `read` call; wrap unbuffered sources such as
/// `File` in a `BufReader` first. Positions count from wherever the stream
/// was when the cursor was created.
#[derive(Debug)]
pub struct FileCursor<R> {
    inner: R,
    position: Position,
}

impl<R: Read + Seek> FileCursor<R> {
    /// Cursor over `inner` starting at its current stream position.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            position: Position::START,
        }
    }

    /// Consume the next byte.
    pub fn next_step(&mut self) -> io::Result<Step> {
        let position = self.position;
        let byte = read_one(&mut self.inner)?;
        if let Some(byte) = byte {
            self.position = position.advance(byte);
        }
        Ok(Step { position, byte })
    }

    /// Look at the next byte without consuming it.
    ///
    /// Reads the byte and seeks the stream back over it.
    pub fn peek(&mut self) -> io::Result<Step> {
        let byte = read_one(&mut self.inner)?;
        if byte.is_some() {
            self.inner.seek(SeekFrom::Current(-1))?;
        }
        Ok(Step {
            position: self.position,
            byte,
        })
    }

    /// Position of the next byte.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The wrapped stream.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the stream. It is left just past the last consumed byte.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
