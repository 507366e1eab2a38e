//! The fixed-capacity string builder.

use std::fmt;
use std::str::Utf8Error;

use ferrule_core::debug_check;

use crate::digits::Decimal;
use crate::error::TextError;

/// Append-only text buffer over a caller-owned byte slice.
///
/// `length` is always strictly less than `capacity`: the last slot is kept
/// free, so at most `capacity - 1` bytes of content fit. Every write is
/// all-or-nothing.
///
/// Content is raw bytes. Embedded NUL bytes are accepted; the builder tracks
/// its length explicitly and never scans for a terminator.
pub struct StringBuilder<'buf> {
    buffer: &'buf mut [u8],
    length: usize,
}

impl<'buf> StringBuilder<'buf> {
    /// Create an empty builder, zeroing `buffer`.
    ///
    /// An empty buffer is a programmer error caught by a debug check; in
    /// release builds such a builder rejects every write.
    pub fn new(buffer: &'buf mut [u8]) -> Self {
        debug_check!(!buffer.is_empty(), "builder buffer must not be empty");
        buffer.fill(0);
        Self { buffer, length: 0 }
    }

    /// Append one byte.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), TextError> {
        self.write_bytes(&[byte])
    }

    /// Append `bytes`, or nothing at all if they do not fit.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TextError> {
        match self.length.checked_add(bytes.len()) {
            Some(end) if end < self.buffer.len() => {
                self.buffer[self.length..end].copy_from_slice(bytes);
                self.length = end;
                Ok(())
            }
            _ => Err(self.capacity_exceeded(bytes.len())),
        }
    }

    /// Append a UTF-8 string.
    pub fn write_string(&mut self, s: &str) -> Result<(), TextError> {
        self.write_bytes(s.as_bytes())
    }

    /// Append the decimal form of a signed integer.
    pub fn write_int(&mut self, value: i64) -> Result<(), TextError> {
        self.write_bytes(Decimal::from_i64(value).as_bytes())
    }

    /// Append the decimal form of an unsigned integer.
    pub fn write_uint(&mut self, value: u64) -> Result<(), TextError> {
        self.write_bytes(Decimal::from_u64(value).as_bytes())
    }

    /// Append `std::fmt` output as one all-or-nothing write.
    ///
    /// Unlike `write!` through [`fmt::Write`], which may leave the pieces
    /// written before the failing one, this rolls back on failure.
    pub fn write_args(&mut self, args: fmt::Arguments<'_>) -> Result<(), TextError> {
        let start = self.length;
        let mut sink = Sink {
            builder: self,
            error: None,
        };
        if fmt::write(&mut sink, args).is_ok() {
            return Ok(());
        }
        let error = sink.error.take();
        self.truncate(start);
        Err(error.unwrap_or(TextError::CapacityExceeded {
            requested: 0,
            available: self.remaining(),
        }))
    }

    fn capacity_exceeded(&self, requested: usize) -> TextError {
        let available = self.remaining();
        tracing::trace!(requested, available, "builder capacity exceeded");
        TextError::CapacityExceeded {
            requested,
            available,
        }
    }

    /// Drop everything after the first `len` bytes.
    pub(crate) fn truncate(&mut self, len: usize) {
        debug_check!(
            len <= self.length,
            "truncate to {len} past length {}",
            self.length
        );
        if len < self.length {
            self.buffer[len..self.length].fill(0);
            self.length = len;
        }
    }

    /// Empty the builder, zeroing the bytes it had written.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// The content written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.length]
    }

    /// The content followed by its zero terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        let end = (self.length + 1).min(self.buffer.len());
        &self.buffer[..end]
    }

    /// The content as UTF-8 text.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// The whole backing buffer, including the unused tail.
    pub fn buffer(&self) -> &[u8] {
        self.buffer
    }

    /// Bytes of content written.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Size of the backing buffer, reserved byte included.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes that can still be written.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.length + 1)
    }
}

impl fmt::Write for StringBuilder<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s).map_err(|_| fmt::Error)
    }
}

impl fmt::Debug for StringBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuilder")
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .field("length", &self.length)
            .field("capacity", &self.buffer.len())
            .finish()
    }
}

/// Adapter keeping the precise error of a failed `fmt::Write` call.
struct Sink<'a, 'buf> {
    builder: &'a mut StringBuilder<'buf>,
    error: Option<TextError>,
}

impl fmt::Write for Sink<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.builder.write_string(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Arg;
    use ferrule_test_utils::dirty_bytes;
    use proptest::prelude::*;
    use std::fmt::Write as _;

    #[test]
    fn new_zeroes_buffer() {
        let mut buf = [0xFFu8; 3];
        let sb = StringBuilder::new(&mut buf);
        assert_eq!(sb.capacity(), 3);
        assert_eq!(sb.len(), 0);
        assert!(sb.is_empty());
        assert_eq!(sb.buffer(), &[0, 0, 0]);
    }

    #[test]
    fn write_byte_reserves_last_slot() {
        let mut buf = [0u8; 3];
        let mut sb = StringBuilder::new(&mut buf);
        assert!(sb.write_byte(b'A').is_ok());
        assert!(sb.write_byte(b'B').is_ok());
        assert_eq!(
            sb.write_byte(b'C'),
            Err(TextError::CapacityExceeded {
                requested: 1,
                available: 0,
            })
        );
        assert_eq!(sb.as_bytes(), b"AB");
        assert_eq!(sb.as_bytes_with_nul(), b"AB\0");
    }

    #[test]
    fn write_bytes_is_atomic() {
        let mut buf = [0u8; 4];
        let mut sb = StringBuilder::new(&mut buf);
        assert!(sb.write_bytes(b"AB").is_ok());
        assert!(sb.write_bytes(b"C").is_ok());
        assert!(sb.write_bytes(b"DEF").is_err());
        assert_eq!(sb.len(), 3);
        assert_eq!(sb.buffer(), b"ABC\0");
    }

    #[test]
    fn write_string_follows_write_bytes() {
        let mut buf = [0u8; 4];
        let mut sb = StringBuilder::new(&mut buf);
        assert!(sb.write_string("AB").is_ok());
        assert_eq!(sb.len(), 2);
        assert!(sb.write_string("C").is_ok());
        assert_eq!(sb.len(), 3);
        assert!(sb.write_string("DEF").is_err());
        assert_eq!(sb.len(), 3);
        assert_eq!(sb.buffer(), b"ABC\0");
    }

    #[test]
    fn empty_write_fits_on_full_builder() {
        // length + 0 == capacity - 1 < capacity, so an empty write fits.
        let mut buf = [0u8; 2];
        let mut sb = StringBuilder::new(&mut buf);
        sb.write_byte(b'x').unwrap();
        assert!(sb.write_bytes(b"").is_ok());
        assert!(sb.write_byte(b'y').is_err());
    }

    #[test]
    fn nul_bytes_are_content() {
        let mut buf = [0u8; 8];
        let mut sb = StringBuilder::new(&mut buf);
        sb.write_bytes(b"a\0b").unwrap();
        assert_eq!(sb.len(), 3);
        assert_eq!(sb.as_bytes(), b"a\0b");
    }

    #[test]
    fn integers() {
        let cases: &[(i64, &str)] = &[
            (0, "0"),
            (9, "9"),
            (-1, "-1"),
            (-9, "-9"),
            (10, "10"),
            (-10, "-10"),
            (12345, "12345"),
            (-12345, "-12345"),
            (i64::MIN, "-9223372036854775808"),
            (i64::MAX, "9223372036854775807"),
        ];
        for &(value, expected) in cases {
            let mut buf = [0u8; 32];
            let mut sb = StringBuilder::new(&mut buf);
            sb.write_int(value).unwrap();
            assert_eq!(sb.as_str().unwrap(), expected);
        }

        let mut buf = [0u8; 32];
        let mut sb = StringBuilder::new(&mut buf);
        sb.write_uint(u64::MAX).unwrap();
        assert_eq!(sb.as_str().unwrap(), "18446744073709551615");
    }

    #[test]
    fn integer_write_is_atomic() {
        let mut buf = [0u8; 5];
        let mut sb = StringBuilder::new(&mut buf);
        sb.write_byte(b'>').unwrap();
        assert!(sb.write_int(-12345).is_err());
        assert_eq!(sb.as_bytes(), b">");
        assert!(sb.write_uint(123).is_ok());
        assert_eq!(sb.as_bytes(), b">123");
    }

    #[test]
    fn clear_resets_and_zeroes() {
        let mut buf = [0u8; 8];
        let mut sb = StringBuilder::new(&mut buf);
        sb.write_string("hello").unwrap();
        sb.clear();
        assert!(sb.is_empty());
        assert_eq!(sb.buffer(), &[0; 8]);
        sb.write_string("bye").unwrap();
        assert_eq!(sb.as_bytes(), b"bye");
    }

    #[test]
    fn fmt_write_integration() {
        let mut buf = [0u8; 16];
        let mut sb = StringBuilder::new(&mut buf);
        write!(sb, "{}-{:03}", "id", 7).unwrap();
        assert_eq!(sb.as_str().unwrap(), "id-007");
    }

    #[test]
    fn write_args_rolls_back() {
        let mut buf = [0u8; 8];
        let mut sb = StringBuilder::new(&mut buf);
        sb.write_string("ab").unwrap();
        let err = sb.write_args(format_args!("{}{}", "cde", "fghij")).unwrap_err();
        assert!(matches!(err, TextError::CapacityExceeded { requested: 5, .. }));
        assert_eq!(sb.as_bytes(), b"ab");
        assert_eq!(sb.buffer(), b"ab\0\0\0\0\0\0");
    }

    #[test]
    fn remaining_counts_writable_bytes() {
        let mut buf = [0u8; 4];
        let mut sb = StringBuilder::new(&mut buf);
        assert_eq!(sb.remaining(), 3);
        sb.write_string("ab").unwrap();
        assert_eq!(sb.remaining(), 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "builder buffer must not be empty")]
    fn empty_buffer_is_a_programmer_error() {
        let mut empty: [u8; 0] = [];
        let _ = StringBuilder::new(&mut empty);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Byte(u8),
        Bytes(Vec<u8>),
        Int(i64),
        Uint(u64),
        Format(usize, i64),
    }

    /// Templates consume `[Arg::Int(_), Arg::Str(b"ab")]` in order; some
    /// conversions deliberately mismatch.
    const TEMPLATES: [&str; 8] = ["%d", "%d:%s", "%i%%", "<%d>", "%d %s!", "%u", "%c", "%s"];

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Byte),
            proptest::collection::vec(any::<u8>(), 0..12).prop_map(Op::Bytes),
            any::<i64>().prop_map(Op::Int),
            any::<u64>().prop_map(Op::Uint),
            (0..TEMPLATES.len(), any::<i64>()).prop_map(|(t, v)| Op::Format(t, v)),
        ]
    }

    proptest! {
        #[test]
        fn length_stays_below_capacity(
            seed in any::<u64>(),
            capacity in 1usize..40,
            ops in proptest::collection::vec(arb_op(), 0..24),
        ) {
            let mut buf = dirty_bytes(seed, capacity);
            let mut sb = StringBuilder::new(&mut buf);
            prop_assert!(sb.buffer().iter().all(|&b| b == 0));
            for op in ops {
                let before = sb.buffer().to_vec();
                let len_before = sb.len();
                let result = match op {
                    Op::Byte(b) => sb.write_byte(b),
                    Op::Bytes(ref bytes) => sb.write_bytes(bytes),
                    Op::Int(v) => sb.write_int(v),
                    Op::Uint(v) => sb.write_uint(v),
                    Op::Format(t, v) => sb.format(TEMPLATES[t], &[Arg::Int(v), Arg::Str(b"ab")]),
                };
                prop_assert!(sb.len() < sb.capacity());
                prop_assert_eq!(sb.buffer()[capacity - 1], 0);
                if result.is_err() {
                    prop_assert_eq!(sb.len(), len_before);
                    prop_assert_eq!(sb.buffer(), &before[..]);
                }
            }
        }
    }
}
