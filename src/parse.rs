//! Conversion from the five textual representations

#[cfg(not(feature = "std"))]
use core as std;

use crate::error::{ParseError, ParseErrorKind as Kind};
use crate::text::{CodeUnit, Format, GuidText};
use crate::Guid;
use std::str;

impl Guid {
    /// Creates a GUID from any of the five textual representations, selecting the decoder from
    /// the leading characters. Surrounding whitespace is ignored.
    ///
    /// Numeric overflow in the `X` layout is reported as
    /// [`UnrecognizedFormat`](crate::ParseErrorKind::UnrecognizedFormat); use
    /// [`Guid::from_text`] to tell it apart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::Guid;
    ///
    /// let x = Guid::parse("d85b1407-351d-4694-9392-03acc5870eb1")?;
    /// let y = Guid::parse(" {0xd85b1407,0x351d,0x4694,{0x93,0x92,0x3,0xac,0xc5,0x87,0xe,0xb1}}")?;
    /// assert_eq!(x, y);
    ///
    /// let utf16: Vec<u16> = "D85B1407351D4694939203ACC5870EB1".encode_utf16().collect();
    /// assert_eq!(Guid::parse(&utf16[..])?, x);
    /// # Ok::<(), guid::ParseError>(())
    /// ```
    pub fn parse<S: GuidText + ?Sized>(input: &S) -> Result<Self, ParseError> {
        ParseState::run(FailurePolicy::FoldOverflow, |state| {
            state.parse_any(input.code_units())
        })
    }

    /// Creates a GUID from any of the five textual representations, reporting every failure
    /// kind, including numeric overflow, as is.
    pub fn from_text<S: GuidText + ?Sized>(input: &S) -> Result<Self, ParseError> {
        ParseState::run(FailurePolicy::ReportAll, |state| {
            state.parse_any(input.code_units())
        })
    }

    /// Works like [`Guid::parse`] but returns `None` on failure.
    ///
    /// ```rust
    /// use guid::Guid;
    ///
    /// assert_eq!(Guid::try_parse("not-a-guid"), None);
    /// ```
    pub fn try_parse<S: GuidText + ?Sized>(input: &S) -> Option<Self> {
        Self::from_text(input).ok()
    }

    /// Creates a GUID from the textual representation of the given format only. Surrounding
    /// whitespace is ignored, and so is any whitespace inside the `X` layout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::{Format, Guid, ParseErrorKind};
    ///
    /// let x = Guid::parse_exact("(d85b1407-351d-4694-9392-03acc5870eb1)", Format::P)?;
    /// assert_eq!(x.to_string(), "d85b1407-351d-4694-9392-03acc5870eb1");
    ///
    /// let err = Guid::parse_exact("d85b1407-351d-4694-9392-03acc5870eb1", Format::N);
    /// assert_eq!(err.unwrap_err().kind(), ParseErrorKind::InvalidLength);
    /// # Ok::<(), guid::ParseError>(())
    /// ```
    pub fn parse_exact<S: GuidText + ?Sized>(input: &S, format: Format) -> Result<Self, ParseError> {
        ParseState::run(FailurePolicy::ReportAll, |state| {
            state.parse_format(input.code_units(), format)
        })
    }

    /// Works like [`Guid::parse_exact`] but returns `None` on failure.
    pub fn try_parse_exact<S: GuidText + ?Sized>(input: &S, format: Format) -> Option<Self> {
        Self::parse_exact(input, format).ok()
    }
}

impl str::FromStr for Guid {
    type Err = ParseError;

    /// Creates an object from any of the five textual representations.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl TryFrom<&str> for Guid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse(src)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl TryFrom<String> for Guid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse(&src)
    }
}

/// How a failure is surfaced to the caller.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum FailurePolicy {
    /// Report the exact failure kind.
    ReportAll,
    /// Report numeric overflow as an unrecognized format.
    FoldOverflow,
}

/// The identifier being assembled by one parse call, laid out like [`Guid`].
struct ParseState {
    buf: [u8; 16],
}

/// Source offsets of the two digits of each stored byte in the `N` layout.
const N_OFFSETS: [usize; 16] = [6, 4, 2, 0, 10, 8, 14, 12, 16, 18, 20, 22, 24, 26, 28, 30];

/// Source offsets of the two digits of each stored byte in the `D` layout.
const D_OFFSETS: [usize; 16] = [6, 4, 2, 0, 11, 9, 16, 14, 19, 21, 24, 26, 28, 30, 32, 34];

/// Maps an ASCII code to its hexadecimal value, or to `0x100` if it is not a hex digit.
const HEX_LOOKUP: [u16; 256] = {
    let mut table = [0x100; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u16;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u16;
        table[b'A' as usize + i] = 10 + i as u16;
        i += 1;
    }
    table
};

#[inline]
fn hex_value(code: u32) -> u32 {
    HEX_LOOKUP.get(code as usize).map_or(0x100, |&e| e as u32)
}

impl ParseState {
    /// Runs a decoder on a fresh state and converts the outcome according to `policy`.
    fn run(
        policy: FailurePolicy,
        decode: impl FnOnce(&mut Self) -> Result<(), Kind>,
    ) -> Result<Guid, ParseError> {
        let mut state = Self { buf: [0; 16] };
        match decode(&mut state) {
            Ok(()) => Ok(Guid::from_bytes_le(state.buf)),
            Err(Kind::NumericOverflow32Bit) if policy == FailurePolicy::FoldOverflow => {
                Err(ParseError::new(Kind::UnrecognizedFormat))
            }
            Err(kind) => Err(ParseError::new(kind)),
        }
    }

    fn set_a(&mut self, value: u32) {
        self.buf[..4].copy_from_slice(&value.to_le_bytes());
    }

    fn set_b(&mut self, value: u16) {
        self.buf[4..6].copy_from_slice(&value.to_le_bytes());
    }

    fn set_c(&mut self, value: u16) {
        self.buf[6..8].copy_from_slice(&value.to_le_bytes());
    }

    /// Copies `value` into the trailing bytes starting at `d` + `offset`.
    fn set_tail(&mut self, offset: usize, value: &[u8]) {
        self.buf[8 + offset..8 + offset + value.len()].copy_from_slice(value);
    }

    /// Selects a decoder by the leading characters.
    fn parse_any<T: CodeUnit>(&mut self, input: &[T]) -> Result<(), Kind> {
        let text = T::trim(input);
        if text.len() < 32 {
            return Err(Kind::UnrecognizedFormat);
        }

        if text[0].is(b'(') {
            self.parse_p(text)
        } else if text[0].is(b'{') {
            if text[9].is(b'-') {
                self.parse_b(text)
            } else {
                self.parse_x(T::chars(text))
            }
        } else if text[8].is(b'-') {
            self.parse_d(text)
        } else {
            self.parse_n(text)
        }
    }

    fn parse_format<T: CodeUnit>(&mut self, input: &[T], format: Format) -> Result<(), Kind> {
        let text = T::trim(input);
        match format {
            Format::N => self.parse_n(text),
            Format::D => self.parse_d(text),
            Format::B => self.parse_b(text),
            Format::P => self.parse_p(text),
            Format::X => self.parse_x(T::chars(text)),
        }
    }

    /// Decodes all 16 bytes and checks the validity of the digits once at the end.
    fn decode_bytes<T: CodeUnit>(&mut self, text: &[T], offsets: &[usize; 16]) -> bool {
        let mut acc = 0;
        for (dst, &i) in self.buf.iter_mut().zip(offsets) {
            let e = (hex_value(text[i].to_u32()) << 4) | hex_value(text[i + 1].to_u32());
            acc |= e;
            *dst = e as u8;
        }
        acc < 0x100
    }

    fn parse_n<T: CodeUnit>(&mut self, text: &[T]) -> Result<(), Kind> {
        if text.len() != 32 {
            return Err(Kind::InvalidLength);
        }
        if self.decode_bytes(text, &N_OFFSETS) {
            Ok(())
        } else {
            Err(Kind::InvalidCharacter)
        }
    }

    fn parse_d<T: CodeUnit>(&mut self, text: &[T]) -> Result<(), Kind> {
        if text.len() != 36 {
            return Err(Kind::InvalidLength);
        }
        if ![8, 13, 18, 23].iter().all(|&i| text[i].is(b'-')) {
            return Err(Kind::InvalidDashes);
        }
        if self.decode_bytes(text, &D_OFFSETS) {
            return Ok(());
        }

        let has_legacy_marks = text.iter().any(|e| e.is(b'x') || e.is(b'X') || e.is(b'+'));
        if has_legacy_marks && self.parse_compat_d(text) {
            Ok(())
        } else {
            Err(Kind::InvalidCharacter)
        }
    }

    /// Decodes the `D` layout the way older parsers did: each component may start with `+`
    /// and/or `0x`, which count toward the fixed component width, e.g. `+0x4` as a four-digit
    /// component. The last eight digits never accepted either.
    fn parse_compat_d<T: CodeUnit>(&mut self, text: &[T]) -> bool {
        let component = |range: std::ops::Range<usize>| {
            let mut number = HexNumber::default();
            text[range]
                .iter()
                .try_for_each(|e| number.push(e.to_u32()))
                .ok()
                .map(|()| number.value)
        };
        let plain = |range: std::ops::Range<usize>| {
            text[range].iter().try_fold(0u32, |acc, e| match hex_value(e.to_u32()) {
                v if v < 0x10 => Some((acc << 4) | v),
                _ => None,
            })
        };

        let (Some(a), Some(b), Some(c), Some(de), Some(fg), Some(hijk)) = (
            component(0..8),
            component(9..13),
            component(14..18),
            component(19..23),
            component(24..28),
            plain(28..36),
        ) else {
            return false;
        };

        self.set_a(a);
        self.set_b(b as u16);
        self.set_c(c as u16);
        self.set_tail(0, &(de as u16).to_be_bytes());
        self.set_tail(2, &(fg as u16).to_be_bytes());
        self.set_tail(4, &hijk.to_be_bytes());
        true
    }

    fn parse_b<T: CodeUnit>(&mut self, text: &[T]) -> Result<(), Kind> {
        self.parse_enclosed(text, b'{', b'}')
    }

    fn parse_p<T: CodeUnit>(&mut self, text: &[T]) -> Result<(), Kind> {
        self.parse_enclosed(text, b'(', b')')
    }

    fn parse_enclosed<T: CodeUnit>(&mut self, text: &[T], open: u8, close: u8) -> Result<(), Kind> {
        if text.len() != 38 || !text[0].is(open) || !text[37].is(close) {
            return Err(Kind::InvalidLength);
        }
        self.parse_d(&text[1..37])
    }

    /// Decodes the `X` layout, skipping whitespace anywhere in the input.
    fn parse_x(&mut self, chars: impl Iterator<Item = char>) -> Result<(), Kind> {
        let mut cursor = XCursor {
            chars: chars.filter(|c| !c.is_whitespace()),
        };

        cursor.expect(b'{', Kind::MissingOpeningBrace)?;
        cursor.expect_hex_prefix()?;
        let a = cursor.component(b',', Kind::MissingComma)?;
        self.set_a(a.into_u32()?);

        cursor.expect_hex_prefix()?;
        let b = cursor.component(b',', Kind::MissingComma)?;
        self.set_b(b.into_u32()? as u16);

        cursor.expect_hex_prefix()?;
        let c = cursor.component(b',', Kind::MissingComma)?;
        self.set_c(c.into_u32()? as u16);

        cursor.expect(b'{', Kind::MissingOpeningBrace)?;
        for i in 0..8 {
            cursor.expect_hex_prefix()?;
            let e = if i < 7 {
                cursor.component(b',', Kind::MissingComma)?
            } else {
                cursor.component(b'}', Kind::MissingBraceAfterLastComponent)?
            };
            self.set_tail(i, &[e.into_u8()?]);
        }

        cursor.expect(b'}', Kind::MissingClosingBrace)?;
        match cursor.chars.next() {
            None => Ok(()),
            Some(_) => Err(Kind::TrailingCharacters),
        }
    }
}

/// Reads the `X` layout from a stream of non-whitespace characters.
struct XCursor<I: Iterator<Item = char>> {
    chars: I,
}

impl<I: Iterator<Item = char>> XCursor<I> {
    fn expect(&mut self, ascii: u8, kind: Kind) -> Result<(), Kind> {
        match self.chars.next() {
            Some(c) if c as u32 == ascii as u32 => Ok(()),
            _ => Err(kind),
        }
    }

    fn expect_hex_prefix(&mut self) -> Result<(), Kind> {
        match (self.chars.next(), self.chars.next()) {
            (Some('0'), Some('x' | 'X')) => Ok(()),
            _ => Err(Kind::MissingHexPrefix),
        }
    }

    /// Reads a number up to `terminator`, consuming the terminator.
    ///
    /// The terminator is looked for first: a component without one fails with `missing` even
    /// if it also contains an invalid character.
    fn component(&mut self, terminator: u8, missing: Kind) -> Result<Component, Kind> {
        let mut number = HexNumber::default();
        let mut invalid = false;
        let mut len = 0usize;
        loop {
            match self.chars.next() {
                None => return Err(missing),
                Some(c) if c as u32 == terminator as u32 => break,
                Some(c) => {
                    len += 1;
                    invalid = invalid || number.push(c as u32).is_err();
                }
            }
        }

        if len == 0 {
            Err(missing)
        } else {
            Ok(Component { number, invalid })
        }
    }
}

/// A delimited numeric component of the `X` layout.
struct Component {
    number: HexNumber,
    invalid: bool,
}

impl Component {
    fn into_u32(self) -> Result<u32, Kind> {
        if self.number.overflows() {
            Err(Kind::NumericOverflow32Bit)
        } else if self.invalid {
            Err(Kind::InvalidCharacter)
        } else {
            Ok(self.number.value)
        }
    }

    /// Reads a byte component. A value above `0xff` is reported as a byte overflow as long as
    /// it fits in 32 bits, for compatibility with older parsers.
    fn into_u8(self) -> Result<u8, Kind> {
        match self.into_u32()? {
            v if v > 0xff => Err(Kind::NumericOverflowByte),
            v => Ok(v as u8),
        }
    }
}

/// Stage of [`HexNumber`] in reading the optional sign and prefix.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
enum Stage {
    /// Expecting an optional `+`.
    #[default]
    Sign,
    /// Expecting an optional `0x`.
    Prefix,
    /// Read the `0` of a possible `0x`.
    PrefixZero,
    /// Reading digits.
    Digits,
}

/// Accumulates a hexadecimal number that may start with `+`, then `0x` or `0X`, then any
/// number of leading zeros. Digits past the eighth wrap around but are counted, so overflow can
/// be reported after the fact.
#[derive(Clone, Debug, Default)]
struct HexNumber {
    stage: Stage,
    value: u32,
    digits: usize,
}

impl HexNumber {
    fn push(&mut self, code: u32) -> Result<(), ()> {
        if self.stage == Stage::Sign {
            self.stage = Stage::Prefix;
            if code == b'+' as u32 {
                return Ok(());
            }
        }
        if self.stage == Stage::Prefix {
            if code == b'0' as u32 {
                self.stage = Stage::PrefixZero;
                return Ok(());
            }
            self.stage = Stage::Digits;
        }
        if self.stage == Stage::PrefixZero {
            // otherwise the zero just read was a leading zero
            self.stage = Stage::Digits;
            if code | 0x20 == b'x' as u32 {
                return Ok(());
            }
        }

        if self.digits == 0 && code == b'0' as u32 {
            return Ok(());
        }
        match hex_value(code) {
            v if v < 0x10 => {
                self.value = self.value.wrapping_mul(16).wrapping_add(v);
                self.digits += 1;
                Ok(())
            }
            _ => Err(()),
        }
    }

    fn overflows(&self) -> bool {
        self.digits > 8
    }
}

#[cfg(test)]
mod tests {
    use super::Guid;
    use crate::{Format, ParseErrorKind as Kind};

    const D_TEXT: &str = "d85b1407-351d-4694-9392-03acc5870eb1";

    fn expected() -> Guid {
        Guid::from_fields(
            0xd85b1407, 0x351d, 0x4694, 0x93, 0x92, 0x03, 0xac, 0xc5, 0x87, 0x0e, 0xb1,
        )
    }

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    /// Asserts the result of every entry point for both encodings
    fn assert_parses(text: &str, format: Format, expected: Result<Guid, Kind>) {
        let exact = Guid::parse_exact(text, format).map_err(|e| e.kind());
        assert_eq!(exact, expected, "{:?} as {:?}", text, format);
        let exact16 = Guid::parse_exact(&utf16(text)[..], format).map_err(|e| e.kind());
        assert_eq!(exact16, expected, "{:?} as {:?} in UTF-16", text, format);
        assert_eq!(Guid::try_parse_exact(text, format), expected.ok());
    }

    /// Parses the reference identifier in every format
    #[test]
    fn parses_the_reference_identifier_in_every_format() {
        let cases = [
            ("d85b1407351d4694939203acc5870eb1", Format::N),
            ("D85B1407351D4694939203ACC5870EB1", Format::N),
            (D_TEXT, Format::D),
            ("D85B1407-351D-4694-9392-03ACC5870EB1", Format::D),
            ("{d85b1407-351d-4694-9392-03acc5870eb1}", Format::B),
            ("(d85b1407-351d-4694-9392-03acc5870eb1)", Format::P),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Format::X,
            ),
            (
                "{0XD85B1407,0X351D,0X4694,{0X93,0X92,0X03,0XAC,0XC5,0X87,0X0E,0XB1}}",
                Format::X,
            ),
        ];
        for (text, format) in cases {
            assert_parses(text, format, Ok(expected()));
            assert_eq!(Guid::parse(text), Ok(expected()));
            assert_eq!(Guid::parse(&utf16(text)[..]), Ok(expected()));
            assert_eq!(Guid::try_parse(text.as_bytes()), Some(expected()));
            assert_eq!(text.parse::<Guid>(), Ok(expected()));
        }
    }

    /// Ignores surrounding whitespace
    #[test]
    fn ignores_surrounding_whitespace() {
        for text in [
            " d85b1407-351d-4694-9392-03acc5870eb1",
            "d85b1407-351d-4694-9392-03acc5870eb1\r\n",
            "\t{d85b1407-351d-4694-9392-03acc5870eb1}\u{a0}",
            "\u{3000}d85b1407351d4694939203acc5870eb1\u{2028}",
        ] {
            assert_eq!(Guid::parse(text), Ok(expected()), "{:?}", text);
            assert_eq!(Guid::parse(&utf16(text)[..]), Ok(expected()), "{:?}", text);
        }

        assert_parses(" (d85b1407-351d-4694-9392-03acc5870eb1) ", Format::P, Ok(expected()));
        assert_parses(
            "d85b1407-351d-4694-9392-03acc5870eb1 ",
            Format::D,
            Ok(expected()),
        );
    }

    /// Ignores whitespace anywhere in the X format only
    #[test]
    fn ignores_whitespace_anywhere_in_the_x_format_only() {
        let text = " { 0xd85b1407 , 0x351d,\n0x4694, { 0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0x\tb1 } } ";
        assert_parses(text, Format::X, Ok(expected()));
        assert_eq!(Guid::parse(text), Ok(expected()));
        assert_eq!(
            Guid::parse("{0 x d85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}"),
            Ok(expected())
        );

        assert_parses(
            "d85b1407-351d-4694-9392 03acc5870eb1",
            Format::D,
            Err(Kind::InvalidDashes),
        );
        assert_parses(
            "d85b1407-351d-4694-9392-03acc 870eb1",
            Format::D,
            Err(Kind::InvalidCharacter),
        );
    }

    /// Accepts variable-width X components
    #[test]
    fn accepts_variable_width_x_components() {
        let cases = [
            "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x3,0xac,0xc5,0x87,0xe,0xb1}}",
            "{0x00000000d85b1407,0x0000351d,0x4694,{0x093,0x92,0x003,0xac,0xc5,0x87,0x0e,0xb1}}",
            "{0x+d85b1407,0x+0x351d,0x0X4694,{0x+93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
        ];
        for text in cases {
            assert_parses(text, Format::X, Ok(expected()));
        }

        let zero = "{0x0,0x0,0x0,{0x0,0x0,0x0,0x0,0x0,0x0,0x0,0x0}}";
        assert_parses(zero, Format::X, Ok(Guid::NIL));
        let prefix_only = "{0x+,0x0x,0x+0x,{0x0,0x0,0x0,0x0,0x0,0x0,0x0,0x0}}";
        assert_parses(prefix_only, Format::X, Ok(Guid::NIL));
    }

    /// Truncates 16-bit X components silently
    #[test]
    fn truncates_16_bit_x_components_silently() {
        let text = "{0xd85b1407,0x1351d,0xfff4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}";
        assert_parses(text, Format::X, Ok(expected()));
    }

    /// Reports overflow kinds of X components
    #[test]
    fn reports_overflow_kinds_of_x_components() {
        let cases = [
            (
                "{0x1d85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::NumericOverflow32Bit,
            ),
            (
                "{0xd85b1407,0x100000000,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::NumericOverflow32Bit,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x193,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::NumericOverflowByte,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xffffffff}}",
                Kind::NumericOverflowByte,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0x1ffffffff}}",
                Kind::NumericOverflow32Bit,
            ),
            (
                "{0x123456789g,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::NumericOverflow32Bit,
            ),
            (
                "{0x1234567g,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::InvalidCharacter,
            ),
        ];
        for (text, kind) in cases {
            assert_parses(text, Format::X, Err(kind));
            let err = Guid::from_text(text).unwrap_err();
            assert_eq!(err.kind(), kind);
            assert_eq!(err.is_overflow(), kind == Kind::NumericOverflow32Bit);

            // the lenient parser folds 32-bit overflow into a generic failure
            let folded = match kind {
                Kind::NumericOverflow32Bit => Kind::UnrecognizedFormat,
                _ => kind,
            };
            assert_eq!(Guid::parse(text).map_err(|e| e.kind()), Err(folded));
            assert_eq!(Guid::try_parse(text), None);
        }
    }

    /// Reports structural failures of the X format
    #[test]
    fn reports_structural_failures_of_the_x_format() {
        let cases = [
            ("", Kind::MissingOpeningBrace),
            (
                "0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::MissingOpeningBrace,
            ),
            (
                "{d85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::MissingHexPrefix,
            ),
            (
                "{0xd85b1407,351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::MissingHexPrefix,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,87,0x0e,0xb1}}",
                Kind::MissingHexPrefix,
            ),
            (
                "{0xd85b1407;0x351d;0x4694;{0x93;0x92;0x03;0xac;0xc5;0x87;0x0e;0xb1}}",
                Kind::MissingComma,
            ),
            (
                "{0xd85b1407;0x351d;0x4694;{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::InvalidCharacter,
            ),
            (
                "{0x,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::MissingComma,
            ),
            (
                "{0xd85g1407}0x351d}0x4694}{0x93}0x92}0x03}0xac}0xc5}0x87}0x0e}0xb1}}",
                Kind::MissingComma,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::MissingOpeningBrace,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1",
                Kind::MissingBraceAfterLastComponent,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0x}}",
                Kind::MissingBraceAfterLastComponent,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1,0x00}}",
                Kind::InvalidCharacter,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}",
                Kind::MissingClosingBrace,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}]",
                Kind::MissingClosingBrace,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}}",
                Kind::TrailingCharacters,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}x",
                Kind::TrailingCharacters,
            ),
            (
                "{0xd85b1407,0x35-d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
                Kind::InvalidCharacter,
            ),
            (
                "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0x\u{ff11}}}",
                Kind::InvalidCharacter,
            ),
        ];
        for (text, kind) in cases {
            assert_parses(text, Format::X, Err(kind));
        }
    }

    /// Reports failures of the fixed-width formats
    #[test]
    fn reports_failures_of_the_fixed_width_formats() {
        let cases = [
            ("d85b1407351d4694939203acc5870eb", Format::N, Kind::InvalidLength),
            ("d85b1407351d4694939203acc5870eb1a", Format::N, Kind::InvalidLength),
            ("d85b1407351d4694939203acc5870eg1", Format::N, Kind::InvalidCharacter),
            ("d85b1407-351d-4694-9392-03acc5870eb", Format::D, Kind::InvalidLength),
            ("d85b14073-51d-4694-9392-03acc5870eb1", Format::D, Kind::InvalidDashes),
            ("d85b1407_351d_4694_9392_03acc5870eb1", Format::D, Kind::InvalidDashes),
            ("z85b1407-351d-4694-9392-03acc5870eb1", Format::D, Kind::InvalidCharacter),
            ("d85b1407-351d-4694-9392-03acc5870ebz", Format::D, Kind::InvalidCharacter),
            ("-85b1407-351d-4694-9392-03acc5870eb1", Format::D, Kind::InvalidCharacter),
            ("{d85b1407-351d-4694-9392-03acc5870eb1)", Format::B, Kind::InvalidLength),
            ("d85b1407-351d-4694-9392-03acc5870eb1", Format::B, Kind::InvalidLength),
            ("{d85b1407-351d-4694-9392-03acc5870eb1-}", Format::B, Kind::InvalidLength),
            ("{d85b1407-351d-4694-9392-03acc5870eg1}", Format::B, Kind::InvalidCharacter),
            ("{d85b1407351d-4694-9392-03acc5870eb1-}", Format::B, Kind::InvalidDashes),
            ("(d85b1407-351d-4694-9392-03acc5870eb1}", Format::P, Kind::InvalidLength),
            ("(d85b1407-351d-4694-9392-03acc5870eg1)", Format::P, Kind::InvalidCharacter),
        ];
        for (text, format, kind) in cases {
            assert_parses(text, format, Err(kind));
        }

        // a wide digit is a single UTF-16 code unit
        assert_eq!(
            Guid::parse_exact(&utf16("d85b1407351d4694939203acc5870e\u{ff11}")[..], Format::N)
                .map_err(|e| e.kind()),
            Err(Kind::InvalidLength)
        );
        assert_eq!(
            Guid::parse_exact(&utf16("d85b1407351d4694939203acc5870eb\u{ff11}")[..], Format::N)
                .map_err(|e| e.kind()),
            Err(Kind::InvalidCharacter)
        );
    }

    /// Accepts legacy prefixes in the D format
    #[test]
    fn accepts_legacy_prefixes_in_the_d_format() {
        let cases = [
            "0xd85b14-351d-4694-9392-03acc5870eb1",
            "d85b1407-0x1d-4694-9392-03acc5870eb1",
            "+85b1407-351d-4694-9392-03acc5870eb1",
            "d85b1407-351d-+0X4-9392-03acc5870eb1",
            "d85b1407-351d-4694-0X92-03acc5870eb1",
            "d85b1407-351d-4694-9392-+0xcc5870eb1",
        ];
        let values = [
            Guid::from_fields(
                0xd85b14, 0x351d, 0x4694, 0x93, 0x92, 0x03, 0xac, 0xc5, 0x87, 0x0e, 0xb1,
            ),
            Guid::from_fields(
                0xd85b1407, 0x1d, 0x4694, 0x93, 0x92, 0x03, 0xac, 0xc5, 0x87, 0x0e, 0xb1,
            ),
            Guid::from_fields(
                0x85b1407, 0x351d, 0x4694, 0x93, 0x92, 0x03, 0xac, 0xc5, 0x87, 0x0e, 0xb1,
            ),
            Guid::from_fields(
                0xd85b1407, 0x351d, 0x4, 0x93, 0x92, 0x03, 0xac, 0xc5, 0x87, 0x0e, 0xb1,
            ),
            Guid::from_fields(
                0xd85b1407, 0x351d, 0x4694, 0x00, 0x92, 0x03, 0xac, 0xc5, 0x87, 0x0e, 0xb1,
            ),
            Guid::from_fields(
                0xd85b1407, 0x351d, 0x4694, 0x93, 0x92, 0x00, 0x0c, 0xc5, 0x87, 0x0e, 0xb1,
            ),
        ];
        for (text, value) in cases.iter().zip(values) {
            assert_parses(text, Format::D, Ok(value));
            assert_eq!(Guid::parse(*text), Ok(value));
            assert_parses(&format!("{{{}}}", text), Format::B, Ok(value));
        }
    }

    /// Rejects legacy prefixes where they never applied
    #[test]
    fn rejects_legacy_prefixes_where_they_never_applied() {
        let cases = [
            "d85b1407-351d-4694-9392-03ac0x870eb1",
            "d85b1407-351d-4694-9392-03ac+5870eb1",
            "0x0xb140-351d-4694-9392-03acc5870eb1",
            "++85b140-351d-4694-9392-03acc5870eb1",
            "-0x5b140-351d-4694-9392-03acc5870eb1",
            "d85b1407-351d-4694-9392-03acc5870eb+",
            "d85b1407-351d-46x4-9392-03acc5870eb1",
        ];
        for text in cases {
            assert_parses(text, Format::D, Err(Kind::InvalidCharacter));
        }
    }

    /// Dispatches the lenient parser by leading characters
    #[test]
    fn dispatches_the_lenient_parser_by_leading_characters() {
        let kind = |text: &str| Guid::parse(text).map_err(|e| e.kind());

        assert_eq!(kind("not-a-guid"), Err(Kind::UnrecognizedFormat));
        assert_eq!(kind("d85b1407351d4694939203acc5870eb"), Err(Kind::UnrecognizedFormat));
        assert_eq!(kind("    d85b1407351d4694939203acc587    "), Err(Kind::UnrecognizedFormat));
        assert_eq!(kind(""), Err(Kind::UnrecognizedFormat));

        // '(' selects P, '{' selects B or X, '-' at offset 8 selects D, the rest N
        assert_eq!(kind("(d85b1407-351d-4694-9392-03acc5870eb1"), Err(Kind::InvalidLength));
        assert_eq!(kind("{d85b1407-351d-4694-9392-03acc5870eb1"), Err(Kind::InvalidLength));
        assert_eq!(kind("{d85b1407_351d-4694-9392-03acc5870eb1}"), Err(Kind::MissingHexPrefix));
        assert_eq!(kind("d85b1407-351d-4694-9392-03acc5870eb12"), Err(Kind::InvalidLength));
        assert_eq!(kind("d85b1407351d4694939203acc5870eb1-"), Err(Kind::InvalidLength));
        assert_eq!(kind("d85b1407 351d4694939203acc5870eb1"), Err(Kind::InvalidLength));
        assert_eq!(kind("d85b1407+351d4694939203acc5870eb"), Err(Kind::InvalidCharacter));
    }

    /// Accepts exactly what each exact parser accepts
    #[test]
    fn accepts_exactly_what_each_exact_parser_accepts() {
        let formats = [Format::N, Format::D, Format::B, Format::P, Format::X];
        let inputs = [
            "d85b1407351d4694939203acc5870eb1",
            "d85b1407351d4694939203acc5870ebz",
            D_TEXT,
            "d85b1407-351d-4694-9392-03acc5870ebz",
            "d85b1407-0x1d-4694-9392-03acc5870eb1",
            "{d85b1407-351d-4694-9392-03acc5870eb1}",
            "{d85b1407-351d-4694-9392-03acc5870eb1)",
            "(d85b1407-351d-4694-9392-03acc5870eb1)",
            "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}",
            "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}",
            "{0x0,0x0,0x0,{0x0,0x0,0x0,0x0,0x0,0x0,0x0,0x0}}",
        ];
        for text in inputs {
            let lenient = Guid::try_parse(text);
            let exact: Vec<Guid> = formats
                .iter()
                .filter_map(|&f| Guid::try_parse_exact(text, f))
                .collect();
            match lenient {
                Some(value) => assert_eq!(exact, vec![value], "{:?}", text),
                None => assert!(exact.is_empty(), "{:?}", text),
            }
        }
    }

    /// Parses the nil identifier
    #[test]
    fn parses_the_nil_identifier() {
        assert_eq!(Guid::parse("00000000-0000-0000-0000-000000000000"), Ok(Guid::NIL));
        assert_eq!(Guid::parse("ffffffffffffffffffffffffffffffff"), Ok(Guid::MAX));
    }

    /// Leaves no partial result after failure
    #[test]
    fn leaves_no_partial_result_after_failure() {
        assert_eq!(Guid::try_parse("d85b1407-351d-4694-9392-03acc5870ebz"), None);
        assert_eq!(
            Guid::try_parse("{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e}}"),
            None
        );
    }

    /// Converts owned and borrowed strings
    #[test]
    fn converts_owned_and_borrowed_strings() {
        assert_eq!(Guid::try_from(D_TEXT), Ok(expected()));
        assert_eq!(Guid::try_from(D_TEXT.to_uppercase()), Ok(expected()));
        assert_eq!(Guid::parse(&String::from(D_TEXT)), Ok(expected()));
        assert_eq!(Guid::parse(b"d85b1407351d4694939203acc5870eb1"), Ok(expected()));
        assert!(Guid::try_from("d85b1407-351d-4694-9392").is_err());
    }
}
