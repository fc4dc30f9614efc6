//! Error types

use core::fmt;

/// The reason a string was rejected by the parser.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorKind {
    /// The input does not have the exact length the format requires.
    InvalidLength,
    /// The dashes of the `D` layout are not at offsets 8, 13, 18 and 23.
    InvalidDashes,
    /// A character that is not a hexadecimal digit appeared where one was expected.
    InvalidCharacter,
    /// The `X` layout is missing its opening brace or the brace before the byte list.
    MissingOpeningBrace,
    /// The `X` layout is missing its final closing brace.
    MissingClosingBrace,
    /// The eighth byte of the `X` layout is not followed by a closing brace.
    MissingBraceAfterLastComponent,
    /// A component of the `X` layout does not start with `0x`.
    MissingHexPrefix,
    /// A component of the `X` layout is not followed by a comma, or is empty.
    MissingComma,
    /// Characters remain after the final closing brace of the `X` layout.
    TrailingCharacters,
    /// A component has more than 8 significant hexadecimal digits.
    NumericOverflow32Bit,
    /// A byte component of the `X` layout is larger than `0xff`.
    NumericOverflowByte,
    /// The input does not resemble any of the supported layouts.
    UnrecognizedFormat,
}

impl ParseErrorKind {
    const fn description(self) -> &'static str {
        match self {
            Self::InvalidLength => {
                "expected 32 digits with 4 dashes (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)"
            }
            Self::InvalidDashes => "dashes are in the wrong position",
            Self::InvalidCharacter => "invalid hexadecimal character",
            Self::MissingOpeningBrace => "could not find an opening brace",
            Self::MissingClosingBrace => "could not find the final closing brace",
            Self::MissingBraceAfterLastComponent => {
                "could not find a brace after the last byte component"
            }
            Self::MissingHexPrefix => "could not find the 0x prefix of a component",
            Self::MissingComma => "could not find a comma, or a component is empty",
            Self::TrailingCharacters => "additional characters after the closing brace",
            Self::NumericOverflow32Bit => "value too large for an unsigned 32-bit integer",
            Self::NumericOverflowByte => "value of a byte component larger than 0xff",
            Self::UnrecognizedFormat => "unrecognized string representation",
        }
    }
}

/// Error parsing an invalid string representation of GUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the reason the input was rejected.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns `true` if a numeric component exceeded 32 bits.
    ///
    /// The lenient [`Guid::parse`](crate::Guid::parse) never reports this; it folds overflow
    /// into [`ParseErrorKind::UnrecognizedFormat`].
    pub const fn is_overflow(&self) -> bool {
        matches!(self.kind, ParseErrorKind::NumericOverflow32Bit)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation: {}", self.kind.description())
    }
}

/// Error creating a GUID from a byte slice of the wrong length.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InvalidLengthError {
    pub(crate) expected: usize,
    pub(crate) actual: usize,
}

impl InvalidLengthError {
    /// Returns the number of bytes required.
    pub const fn expected(&self) -> usize {
        self.expected
    }

    /// Returns the number of bytes given.
    pub const fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for InvalidLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a byte slice of length {}, got {}",
            self.expected, self.actual
        )
    }
}

/// Error generating a UUIDv7 from a timestamp before the Unix epoch.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TimestampRangeError {
    pub(crate) unix_ts_ms: i64,
}

impl TimestampRangeError {
    /// Returns the rejected timestamp in milliseconds.
    pub const fn unix_ts_ms(&self) -> i64 {
        self.unix_ts_ms
    }
}

impl fmt::Display for TimestampRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timestamp must not be negative, got {} ms",
            self.unix_ts_ms
        )
    }
}

/// Error reading a format specifier other than one of `N`, `D`, `B`, `P` and `X`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FormatSpecError {}

impl fmt::Display for FormatSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format specifier must be one of \"N\", \"D\", \"B\", \"P\" and \"X\"")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{FormatSpecError, InvalidLengthError, ParseError, TimestampRangeError};

    impl std::error::Error for ParseError {}

    impl std::error::Error for InvalidLengthError {}

    impl std::error::Error for TimestampRangeError {}

    impl std::error::Error for FormatSpecError {}
}
