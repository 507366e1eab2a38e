//! Buffered reader over a caller-supplied buffer.
//!
//! [`FileReader`] fills the borrowed buffer from its source in whole chunks
//! and serves bytes out of it. It never allocates, so the same stack or
//! arena buffer can back many readers in turn.

use std::io::{self, Read, Seek, SeekFrom};

use ferrule_core::debug_check;

/// Buffered reader whose buffer is borrowed for `'buf`.
///
/// End of input is sticky: once a refill returns no bytes the reader reports
/// EOF until [`seek`](FileReader::seek) is called.
pub struct FileReader<'buf, R> {
    inner: R,
    buffer: &'buf mut [u8],
    /// Bytes of `buffer` holding valid data.
    length: usize,
    /// Next unread byte in `buffer`.
    index: usize,
    eof: bool,
}

impl<'buf, R: Read + Seek> FileReader<'buf, R> {
    /// Reader over `inner` using `buffer` for staging.
    ///
    /// An empty buffer is a programmer error and trips a debug check; in
    /// release builds such a reader reports EOF immediately.
    pub fn new(inner: R, buffer: &'buf mut [u8]) -> Self {
        debug_check!(!buffer.is_empty(), "reader buffer must not be empty");
        Self {
            inner,
            buffer,
            length: 0,
            index: 0,
            eof: false,
        }
    }

    /// Refill the buffer if every staged byte has been consumed.
    ///
    /// Returns `Ok(false)` at end of input.
    pub fn refresh(&mut self) -> io::Result<bool> {
        if self.eof {
            return Ok(false);
        }
        if self.index < self.length {
            return Ok(true);
        }

        let n = loop {
            match self.inner.read(&mut self.buffer[..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.length = n;
        self.index = 0;
        if n == 0 {
            self.eof = true;
            tracing::trace!("reader reached end of input");
            return Ok(false);
        }
        tracing::trace!(bytes = n, capacity = self.buffer.len(), "reader refilled");
        Ok(true)
    }

    /// Consume one byte. `Ok(None)` at end of input.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.index += 1;
        }
        Ok(byte)
    }

    /// Copy up to `out.len()` bytes into `out`, refilling as needed.
    ///
    /// Returns the number of bytes copied; fewer than `out.len()` only at
    /// end of input.
    pub fn read_bytes(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let mut copied = 0;
        while copied < out.len() && self.refresh()? {
            let staged = &self.buffer[self.index..self.length];
            let n = staged.len().min(out.len() - copied);
            out[copied..copied + n].copy_from_slice(&staged[..n]);
            self.index += n;
            copied += n;
        }
        Ok(copied)
    }

    /// Look at the next byte without consuming it.
    ///
    /// Served from the buffer; the source is only touched when a refill is
    /// needed.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        if !self.refresh()? {
            return Ok(None);
        }
        Ok(Some(self.buffer[self.index]))
    }

    /// Move to `pos`, discarding staged bytes and clearing EOF.
    ///
    /// `SeekFrom::Current` is relative to the next unread byte, not to the
    /// source's own position. Returns the new offset from the start. An
    /// offset that cannot be expressed once staged bytes are accounted for
    /// fails with `InvalidInput` and leaves the reader untouched.
    pub fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let pos = match pos {
            SeekFrom::Current(delta) => {
                let unread = (self.length - self.index) as i64;
                let delta = delta.checked_sub(unread).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "relative seek offset overflows",
                    )
                })?;
                SeekFrom::Current(delta)
            }
            other => other,
        };
        let offset = self.inner.seek(pos)?;
        self.length = 0;
        self.index = 0;
        self.eof = false;
        tracing::trace!(offset, "reader seek");
        Ok(offset)
    }

    /// Offset of the next unread byte from the start of the source.
    pub fn stream_position(&mut self) -> io::Result<u64> {
        let source = self.inner.stream_position()?;
        Ok(source - (self.length - self.index) as u64)
    }

    /// Whether a refill has hit end of input.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Unwrap the source. Staged but unread bytes are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> Read for FileReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_bytes(buf)
    }
}

impl<R: Read + Seek> Seek for FileReader<'_, R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        FileReader::seek(self, pos)
    }
}

impl<R> std::fmt::Debug for FileReader<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileReader")
            .field("capacity", &self.buffer.len())
            .field("length", &self.length)
            .field("index", &self.index)
            .field("eof", &self.eof)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrule_test_utils::dirty_bytes;
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn reads_across_refills() {
        let mut buf = [0u8; 3];
        let mut reader = FileReader::new(Cursor::new(b"hello".to_vec()), &mut buf);
        let mut out = Vec::new();
        while let Some(b) = reader.read_byte().unwrap() {
            out.push(b);
        }
        assert_eq!(out, b"hello");
        assert!(reader.is_eof());
        assert_eq!(reader.read_byte().unwrap(), None);
    }

    #[test]
    fn peek_is_idempotent() {
        let mut buf = [0u8; 4];
        let mut reader = FileReader::new(Cursor::new(b"ab".to_vec()), &mut buf);
        assert_eq!(reader.peek().unwrap(), Some(b'a'));
        assert_eq!(reader.peek().unwrap(), Some(b'a'));
        assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
        assert_eq!(reader.peek().unwrap(), Some(b'b'));
    }

    #[test]
    fn read_bytes_short_at_eof() {
        let mut buf = [0u8; 2];
        let mut reader = FileReader::new(Cursor::new(b"abcde".to_vec()), &mut buf);
        let mut out = [0u8; 4];
        assert_eq!(reader.read_bytes(&mut out).unwrap(), 4);
        assert_eq!(&out, b"abcd");
        assert_eq!(reader.read_bytes(&mut out).unwrap(), 1);
        assert_eq!(out[0], b'e');
        assert_eq!(reader.read_bytes(&mut out).unwrap(), 0);
    }

    #[test]
    fn seek_clears_eof_and_staging() {
        let mut buf = [0u8; 8];
        let mut reader = FileReader::new(Cursor::new(b"abc".to_vec()), &mut buf);
        let mut out = [0u8; 8];
        reader.read_bytes(&mut out).unwrap();
        assert!(reader.is_eof());
        assert_eq!(reader.seek(SeekFrom::Start(1)).unwrap(), 1);
        assert!(!reader.is_eof());
        assert_eq!(reader.read_byte().unwrap(), Some(b'b'));
    }

    #[test]
    fn relative_seek_is_from_logical_position() {
        let mut buf = [0u8; 8];
        let mut reader = FileReader::new(Cursor::new(b"abcdef".to_vec()), &mut buf);
        assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
        assert_eq!(reader.read_byte().unwrap(), Some(b'b'));
        assert_eq!(reader.stream_position().unwrap(), 2);
        assert_eq!(reader.seek(SeekFrom::Current(-1)).unwrap(), 1);
        assert_eq!(reader.read_byte().unwrap(), Some(b'b'));
        assert_eq!(reader.seek(SeekFrom::End(-1)).unwrap(), 5);
        assert_eq!(reader.read_byte().unwrap(), Some(b'f'));
    }

    #[test]
    fn relative_seek_overflow_is_rejected() {
        let mut buf = [0u8; 8];
        let mut reader = FileReader::new(Cursor::new(b"abcdef".to_vec()), &mut buf);
        assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
        let err = reader.seek(SeekFrom::Current(i64::MIN)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(reader.read_byte().unwrap(), Some(b'b'));
        let err = Seek::seek(&mut reader, SeekFrom::Current(i64::MIN)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn implements_read() {
        let mut buf = [0u8; 5];
        let mut reader = FileReader::new(Cursor::new(b"stream text".to_vec()), &mut buf);
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "stream text");
    }

    struct Interrupting {
        inner: Cursor<Vec<u8>>,
        interrupted: bool,
    }

    impl Read for Interrupting {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::ErrorKind::Interrupted.into());
            }
            self.inner.read(buf)
        }
    }

    impl Seek for Interrupting {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let source = Interrupting {
            inner: Cursor::new(b"z".to_vec()),
            interrupted: false,
        };
        let mut buf = [0u8; 4];
        let mut reader = FileReader::new(source, &mut buf);
        assert_eq!(reader.read_byte().unwrap(), Some(b'z'));
    }

    proptest! {
        #[test]
        fn any_buffer_size_reads_everything(
            seed in any::<u64>(),
            len in 0usize..512,
            capacity in 1usize..64,
            chunk in 1usize..32,
        ) {
            let data = dirty_bytes(seed, len);
            let mut buf = vec![0u8; capacity];
            let mut reader = FileReader::new(Cursor::new(data.clone()), &mut buf);
            let mut out = Vec::new();
            let mut piece = vec![0u8; chunk];
            loop {
                let n = reader.read_bytes(&mut piece).unwrap();
                if n == 0 {
                    break;
                }
                out.extend_from_slice(&piece[..n]);
            }
            prop_assert_eq!(out, data);
        }
    }
}
