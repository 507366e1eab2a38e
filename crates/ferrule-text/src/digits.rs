//! Decimal encoding of 64-bit integers without allocation.
//!
//! [`Decimal`] renders a value into a small inline array so the builder can
//! append it with a single all-or-nothing write.

/// Most digits a `u64` can have (`18446744073709551615`).
pub const MAX_DIGITS: usize = 20;

/// Longest rendering: a sign plus [`MAX_DIGITS`] digits.
pub const MAX_LEN: usize = MAX_DIGITS + 1;

/// The decimal ASCII rendering of one integer.
#[derive(Clone, Copy)]
pub struct Decimal {
    bytes: [u8; MAX_LEN],
    len: usize,
}

impl Decimal {
    /// Render a signed value, with a leading `-` when negative.
    pub fn from_i64(value: i64) -> Self {
        if (-9..=9).contains(&value) {
            return Self::single_digit(value < 0, value.unsigned_abs() as u8);
        }
        // unsigned_abs keeps i64::MIN defined: its magnitude only fits in u64.
        Self::encode(value < 0, value.unsigned_abs())
    }

    /// Render an unsigned value.
    pub fn from_u64(value: u64) -> Self {
        if value < 10 {
            return Self::single_digit(false, value as u8);
        }
        Self::encode(false, value)
    }

    fn single_digit(negative: bool, digit: u8) -> Self {
        let mut out = Self::empty();
        if negative {
            out.push(b'-');
        }
        out.push(b'0' + digit);
        out
    }

    /// General path: collect digits least-significant first, then emit them
    /// in reverse.
    fn encode(negative: bool, magnitude: u64) -> Self {
        let mut reversed = [0u8; MAX_DIGITS];
        let mut count = 0;
        let mut rest = magnitude;
        loop {
            reversed[count] = b'0' + (rest % 10) as u8;
            count += 1;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }

        let mut out = Self::empty();
        if negative {
            out.push(b'-');
        }
        for &digit in reversed[..count].iter().rev() {
            out.push(digit);
        }
        out
    }

    fn empty() -> Self {
        Self {
            bytes: [0; MAX_LEN],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    /// The rendered ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of rendered bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; every integer renders to at least one digit.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
