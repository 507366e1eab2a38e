//! Minimal printf-style formatting.
//!
//! Conversions:
//!
//! | Template | Argument | Output |
//! |----------|----------|--------|
//! | `%d`, `%i` | [`Arg::Int`], [`Arg::Byte`], or [`Arg::Uint`] up to `i64::MAX` | signed decimal |
//! | `%u` | [`Arg::Uint`], [`Arg::Byte`], or non-negative [`Arg::Int`] | unsigned decimal |
//! | `%c` | [`Arg::Byte`], or an integer in `0..=255` | one raw byte |
//! | `%s` | [`Arg::Str`] | the bytes verbatim |
//! | `%%` | none | `%` |
//!
//! Any other byte after `%` is copied literally together with the `%`, and
//! a `%` ending the template is copied as is. Arguments left over after the
//! template is exhausted are ignored.

use std::fmt;

use crate::builder::StringBuilder;
use crate::error::TextError;

/// One typed argument for [`StringBuilder::format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Single raw byte.
    Byte(u8),
    /// Byte string.
    Str(&'a [u8]),
}

impl Arg<'_> {
    /// The variant, without its payload.
    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Int(_) => ArgKind::Int,
            Self::Uint(_) => ArgKind::Uint,
            Self::Byte(_) => ArgKind::Byte,
            Self::Str(_) => ArgKind::Str,
        }
    }
}

/// Payload-free tag of an [`Arg`], used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// [`Arg::Int`].
    Int,
    /// [`Arg::Uint`].
    Uint,
    /// [`Arg::Byte`].
    Byte,
    /// [`Arg::Str`].
    Str,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "signed integer",
            Self::Uint => "unsigned integer",
            Self::Byte => "byte",
            Self::Str => "string",
        };
        f.write_str(name)
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(v: $source) -> Self {
                    Self::$variant(v as $target)
                }
            }
        )+
    };
}

arg_from!(Int as i64: i8, i16, i32, i64, isize);
arg_from!(Uint as u64: u16, u32, u64, usize);

impl From<u8> for Arg<'_> {
    fn from(v: u8) -> Self {
        Self::Byte(v)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(v.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(v: &'a [u8]) -> Self {
        Self::Str(v)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(v: &'a [u8; N]) -> Self {
        Self::Str(v)
    }
}

/// Format into a builder with arguments converted through [`Arg::from`].
///
/// A `u8` converts to [`Arg::Byte`]; it still renders as a number under
/// `%d`, `%i` and `%u`.
///
/// ```
/// use ferrule_text::{sb_format, StringBuilder};
///
/// let mut buf = [0u8; 16];
/// let mut sb = StringBuilder::new(&mut buf);
/// sb_format!(sb, "100%% done").unwrap();
/// assert_eq!(sb.as_bytes(), b"100% done");
/// ```
#[macro_export]
macro_rules! sb_format {
    ($builder:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $builder.format($template, &[$($crate::Arg::from($arg)),*])
    };
}

impl StringBuilder<'_> {
    /// Append `template` with its conversions replaced by `args`.
    ///
    /// The call is all-or-nothing: if any piece does not fit, or an argument
    /// is missing or unusable, scanning stops and the builder is restored to
    /// its state before the call.
    pub fn format(
        &mut self,
        template: impl AsRef<[u8]>,
        args: &[Arg<'_>],
    ) -> Result<(), TextError> {
        let start = self.len();
        let result = self.format_inner(template.as_ref(), args);
        if let Err(ref error) = result {
            if !matches!(error, TextError::CapacityExceeded { .. }) {
                tracing::debug!(%error, "format rejected");
            }
            self.truncate(start);
        }
        result
    }

    fn format_inner(&mut self, template: &[u8], args: &[Arg<'_>]) -> Result<(), TextError> {
        let mut next_arg = 0;
        let mut bytes = template.iter().copied();

        while let Some(byte) = bytes.next() {
            if byte != b'%' {
                self.write_byte(byte)?;
                continue;
            }
            let Some(specifier) = bytes.next() else {
                self.write_byte(b'%')?;
                break;
            };
            match specifier {
                b'd' | b'i' | b'u' | b'c' | b's' => {
                    let index = next_arg;
                    let arg = args
                        .get(index)
                        .copied()
                        .ok_or(TextError::MissingArgument { specifier, index })?;
                    next_arg += 1;
                    self.write_conversion(specifier, index, arg)?;
                }
                b'%' => self.write_byte(b'%')?,
                other => self.write_bytes(&[b'%', other])?,
            }
        }
        Ok(())
    }

    fn write_conversion(
        &mut self,
        specifier: u8,
        index: usize,
        arg: Arg<'_>,
    ) -> Result<(), TextError> {
        let mismatch = TextError::ArgumentMismatch {
            specifier,
            index,
            found: arg.kind(),
        };
        match (specifier, arg) {
            (b'd' | b'i', Arg::Int(v)) => self.write_int(v),
            (b'd' | b'i', Arg::Byte(v)) => self.write_int(i64::from(v)),
            (b'd' | b'i', Arg::Uint(v)) => {
                let v = i64::try_from(v).map_err(|_| mismatch)?;
                self.write_int(v)
            }
            (b'u', Arg::Uint(v)) => self.write_uint(v),
            (b'u', Arg::Byte(v)) => self.write_uint(u64::from(v)),
            (b'u', Arg::Int(v)) => {
                let v = u64::try_from(v).map_err(|_| mismatch)?;
                self.write_uint(v)
            }
            (b'c', Arg::Byte(v)) => self.write_byte(v),
            (b'c', Arg::Int(v)) => self.write_byte(u8::try_from(v).map_err(|_| mismatch)?),
            (b'c', Arg::Uint(v)) => self.write_byte(u8::try_from(v).map_err(|_| mismatch)?),
            (b's', Arg::Str(v)) => self.write_bytes(v),
            _ => Err(mismatch),
        }
    }
}
