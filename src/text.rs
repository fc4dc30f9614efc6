//! Text encodings and format selection

use crate::error::FormatSpecError;
use core::{iter, slice, str};

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// A code unit of UTF-8 (`u8`) or UTF-16 (`u16`) text.
///
/// Every parsing and formatting function accepts either encoding and behaves identically for
/// both. This trait is sealed.
pub trait CodeUnit: Copy + Eq + sealed::Sealed {
    #[doc(hidden)]
    type Chars<'a>: Iterator<Item = char>
    where
        Self: 'a;

    #[doc(hidden)]
    fn from_ascii(ascii: u8) -> Self;

    #[doc(hidden)]
    fn to_u32(self) -> u32;

    /// Removes leading and trailing whitespace.
    #[doc(hidden)]
    fn trim(text: &[Self]) -> &[Self];

    /// Decodes the text into characters; malformed sequences turn into U+FFFD.
    #[doc(hidden)]
    fn chars(text: &[Self]) -> Self::Chars<'_>;

    #[doc(hidden)]
    #[inline]
    fn is(self, ascii: u8) -> bool {
        self.to_u32() == ascii as u32
    }
}

impl CodeUnit for u8 {
    type Chars<'a> = Utf8Chars<'a>;

    #[inline]
    fn from_ascii(ascii: u8) -> Self {
        ascii
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    fn trim(text: &[Self]) -> &[Self] {
        match str::from_utf8(text) {
            Ok(s) => s.trim().as_bytes(),
            Err(_) => {
                // non-ASCII whitespace cannot rescue a malformed input anyway
                let is_space = |e: &u8| e.is_ascii() && char::from(*e).is_whitespace();
                let start = text.iter().position(|e| !is_space(e)).unwrap_or(text.len());
                let end = text.iter().rposition(|e| !is_space(e)).map_or(start, |i| i + 1);
                &text[start..end]
            }
        }
    }

    fn chars(text: &[Self]) -> Self::Chars<'_> {
        match str::from_utf8(text) {
            Ok(s) => Utf8Chars::Valid(s.chars()),
            Err(_) => Utf8Chars::Lossy(text.iter()),
        }
    }
}

impl CodeUnit for u16 {
    type Chars<'a> = iter::Map<
        core::char::DecodeUtf16<iter::Copied<slice::Iter<'a, u16>>>,
        fn(Result<char, core::char::DecodeUtf16Error>) -> char,
    >;

    #[inline]
    fn from_ascii(ascii: u8) -> Self {
        ascii as u16
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    fn trim(text: &[Self]) -> &[Self] {
        // every whitespace character lies in the BMP, so surrogates never match
        let is_space = |e: &u16| char::from_u32(*e as u32).map_or(false, char::is_whitespace);
        let start = text.iter().position(|e| !is_space(e)).unwrap_or(text.len());
        let end = text.iter().rposition(|e| !is_space(e)).map_or(start, |i| i + 1);
        &text[start..end]
    }

    fn chars(text: &[Self]) -> Self::Chars<'_> {
        char::decode_utf16(text.iter().copied()).map(or_replacement as fn(_) -> _)
    }
}

fn or_replacement(decoded: Result<char, core::char::DecodeUtf16Error>) -> char {
    decoded.unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Iterator over the characters of UTF-8 text that may be malformed.
#[derive(Clone, Debug)]
pub enum Utf8Chars<'a> {
    #[doc(hidden)]
    Valid(str::Chars<'a>),
    /// Only ASCII bytes are meaningful to the parser, so the rest become U+FFFD.
    #[doc(hidden)]
    Lossy(slice::Iter<'a, u8>),
}

impl Iterator for Utf8Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Valid(inner) => inner.next(),
            Self::Lossy(inner) => inner.next().map(|&e| {
                if e.is_ascii() {
                    char::from(e)
                } else {
                    char::REPLACEMENT_CHARACTER
                }
            }),
        }
    }
}

/// Text that can be parsed as a GUID: `str`, `[u8]` (UTF-8) or `[u16]` (UTF-16).
pub trait GuidText {
    /// The code unit of the encoding.
    type Unit: CodeUnit;

    /// Returns the text as a slice of code units.
    fn code_units(&self) -> &[Self::Unit];
}

impl GuidText for str {
    type Unit = u8;

    fn code_units(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl GuidText for [u8] {
    type Unit = u8;

    fn code_units(&self) -> &[u8] {
        self
    }
}

impl GuidText for [u16] {
    type Unit = u16;

    fn code_units(&self) -> &[u16] {
        self
    }
}

impl<const N: usize> GuidText for [u8; N] {
    type Unit = u8;

    fn code_units(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> GuidText for [u16; N] {
    type Unit = u16;

    fn code_units(&self) -> &[u16] {
        self
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl GuidText for String {
    type Unit = u8;

    fn code_units(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Selects one of the five textual representations.
///
/// | Format | Example                                                                |
/// | ------ | ---------------------------------------------------------------------- |
/// | `N`    | `d85b1407351d4694939203acc5870eb1`                                     |
/// | `D`    | `d85b1407-351d-4694-9392-03acc5870eb1`                                 |
/// | `B`    | `{d85b1407-351d-4694-9392-03acc5870eb1}`                               |
/// | `P`    | `(d85b1407-351d-4694-9392-03acc5870eb1)`                               |
/// | `X`    | `{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}` |
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum Format {
    /// 32 digits.
    N,
    /// 32 digits separated by hyphens.
    #[default]
    D,
    /// 32 digits separated by hyphens, enclosed in braces.
    B,
    /// 32 digits separated by hyphens, enclosed in parentheses.
    P,
    /// Four hexadecimal values enclosed in braces, the fourth being a braced list of eight.
    X,
}

impl Format {
    /// Returns the number of characters the format produces.
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::N => 32,
            Self::D => 36,
            Self::B | Self::P => 38,
            Self::X => 68,
        }
    }

    /// Reads a single-character, case-insensitive format specifier. An empty specifier selects
    /// [`Format::D`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::Format;
    ///
    /// assert_eq!(Format::from_specifier("x"), Ok(Format::X));
    /// assert_eq!(Format::from_specifier(""), Ok(Format::D));
    /// assert!(Format::from_specifier("DD").is_err());
    /// ```
    pub fn from_specifier(spec: &str) -> Result<Self, FormatSpecError> {
        match spec.as_bytes() {
            [] => Ok(Self::D),
            [e] => match e | 0x20 {
                b'n' => Ok(Self::N),
                b'd' => Ok(Self::D),
                b'b' => Ok(Self::B),
                b'p' => Ok(Self::P),
                b'x' => Ok(Self::X),
                _ => Err(FormatSpecError {}),
            },
            _ => Err(FormatSpecError {}),
        }
    }
}

impl str::FromStr for Format {
    type Err = FormatSpecError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_specifier(src)
    }
}
