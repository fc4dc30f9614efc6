//! Conversion to the five textual representations

#[cfg(not(feature = "std"))]
use core as std;

use crate::text::{CodeUnit, Format};
use crate::Guid;
use fstr::FStr;
use std::{fmt, ops, str};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// `0x0101...01`, i.e. one in every byte lane of a `u128`.
const LANES: u128 = u128::MAX / 0xff;

const X_TEMPLATE: &[u8; 68] =
    b"{0x00000000,0x0000,0x0000,{0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00}}";

impl Guid {
    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::Guid;
    ///
    /// let x = Guid::parse("D85B1407-351D-4694-9392-03ACC5870EB1")?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "d85b1407-351d-4694-9392-03acc5870eb1");
    /// assert_eq!(format!("{}", y), "d85b1407-351d-4694-9392-03acc5870eb1");
    /// # Ok::<(), guid::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        write_hyphenated(&mut buffer, &hex_digits(&self.to_bytes_be()));
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Returns the string representation of the given format stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::{Format, Guid};
    ///
    /// let x = Guid::parse("d85b1407-351d-4694-9392-03acc5870eb1")?;
    /// assert_eq!(&*x.encode_as(Format::N), "d85b1407351d4694939203acc5870eb1");
    /// assert_eq!(
    ///     &*x.encode_as(Format::X),
    ///     "{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}"
    /// );
    /// # Ok::<(), guid::ParseError>(())
    /// ```
    pub fn encode_as(&self, format: Format) -> Encoded {
        let mut buffer = [0u8; 68];
        let len = render(self, format, &mut buffer);
        Encoded { buffer, len }
    }

    /// Writes the string representation of the given format to the head of `dest`, returning
    /// the number of code units written.
    ///
    /// Returns `None` and leaves `dest` untouched if it is shorter than
    /// [`format.encoded_len()`](Format::encoded_len).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::{Format, Guid};
    ///
    /// let mut utf16 = [0u16; 40];
    /// assert_eq!(Guid::MAX.try_format(&mut utf16, Format::B), Some(38));
    /// assert_eq!(
    ///     String::from_utf16_lossy(&utf16[..38]),
    ///     "{ffffffff-ffff-ffff-ffff-ffffffffffff}"
    /// );
    ///
    /// let mut utf8 = [0u8; 31];
    /// assert_eq!(Guid::MAX.try_format(&mut utf8, Format::N), None);
    /// ```
    pub fn try_format<T: CodeUnit>(&self, dest: &mut [T], format: Format) -> Option<usize> {
        let dest = dest.get_mut(..format.encoded_len())?;
        let mut buffer = [0u8; 68];
        let len = render(self, format, &mut buffer);
        for (d, &s) in dest.iter_mut().zip(&buffer[..len]) {
            *d = T::from_ascii(s);
        }
        Some(len)
    }
}

impl fmt::Display for Guid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Concrete return type of [`Guid::encode_as()`] containing a stack-allocated string
/// representation.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Encoded {
    buffer: [u8; 68],
    len: usize,
}

impl ops::Deref for Encoded {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.buffer.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.buffer[..self.len]) }
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl PartialEq<str> for Encoded {
    fn eq(&self, other: &str) -> bool {
        **self == *other
    }
}

impl PartialEq<&str> for Encoded {
    fn eq(&self, other: &&str) -> bool {
        **self == **other
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Format, Guid};

    impl Guid {
        /// Returns the string representation of the given format.
        pub fn to_string_as(&self, format: Format) -> String {
            String::from(&*self.encode_as(format))
        }
    }

    impl From<Guid> for String {
        fn from(src: Guid) -> Self {
            src.to_string()
        }
    }
}

/// Renders `guid` in `format` into `buffer`, returning the number of bytes used.
fn render(guid: &Guid, format: Format, buffer: &mut [u8; 68]) -> usize {
    let digits = hex_digits(&guid.to_bytes_be());
    match format {
        Format::N => buffer[..32].copy_from_slice(&digits),
        Format::D => write_hyphenated(&mut buffer[..36], &digits),
        Format::B => write_enclosed(&mut buffer[..38], &digits, b'{', b'}'),
        Format::P => write_enclosed(&mut buffer[..38], &digits, b'(', b')'),
        Format::X => {
            buffer.copy_from_slice(X_TEMPLATE);
            buffer[3..11].copy_from_slice(&digits[..8]);
            buffer[14..18].copy_from_slice(&digits[8..12]);
            buffer[21..25].copy_from_slice(&digits[12..16]);
            for (i, pair) in digits[16..].chunks_exact(2).enumerate() {
                let at = 29 + 5 * i;
                buffer[at..at + 2].copy_from_slice(pair);
            }
        }
    }
    format.encoded_len()
}

/// Writes the 8-4-4-4-12 layout into a 36-byte `dst`.
fn write_hyphenated(dst: &mut [u8], digits: &[u8; 32]) {
    dst[..8].copy_from_slice(&digits[..8]);
    dst[8] = b'-';
    dst[9..13].copy_from_slice(&digits[8..12]);
    dst[13] = b'-';
    dst[14..18].copy_from_slice(&digits[12..16]);
    dst[18] = b'-';
    dst[19..23].copy_from_slice(&digits[16..20]);
    dst[23] = b'-';
    dst[24..36].copy_from_slice(&digits[20..]);
}

fn write_enclosed(dst: &mut [u8], digits: &[u8; 32], open: u8, close: u8) {
    dst[0] = open;
    write_hyphenated(&mut dst[1..37], digits);
    dst[37] = close;
}

/// Returns the 32 lowercase hexadecimal digits of 16 big-endian bytes.
#[inline]
fn hex_digits(bytes: &[u8; 16]) -> [u8; 32] {
    #[cfg(target_pointer_width = "64")]
    return hex_digits_wide(bytes);

    #[cfg(not(target_pointer_width = "64"))]
    return hex_digits_scalar(bytes);
}

#[cfg_attr(target_pointer_width = "64", allow(dead_code))]
fn hex_digits_scalar(bytes: &[u8; 16]) -> [u8; 32] {
    let mut buffer = [0u8; 32];
    for (pair, &e) in buffer.chunks_exact_mut(2).zip(bytes) {
        pair[0] = DIGITS[(e >> 4) as usize];
        pair[1] = DIGITS[(e & 15) as usize];
    }
    buffer
}

/// Converts eight bytes at a time in the byte lanes of a `u128`, which pays off where 64-bit
/// arithmetic is native.
#[cfg_attr(not(target_pointer_width = "64"), allow(dead_code))]
fn hex_digits_wide(bytes: &[u8; 16]) -> [u8; 32] {
    let value = u128::from_be_bytes(*bytes);
    let mut buffer = [0u8; 32];
    buffer[..16].copy_from_slice(&hex_lanes((value >> 64) as u64).to_be_bytes());
    buffer[16..].copy_from_slice(&hex_lanes(value as u64).to_be_bytes());
    buffer
}

/// Spreads the 16 nibbles of `half` into the 16 byte lanes of a `u128`, most significant first,
/// and turns each lane into an ASCII hex digit.
const fn hex_lanes(half: u64) -> u128 {
    let mut x = half as u128;
    x = ((x << 32) & 0x0000_0000_ffff_ffff_0000_0000_0000_0000) | (x & 0xffff_ffff);
    x = ((x << 16) & 0x0000_ffff_0000_0000_0000_ffff_0000_0000)
        | (x & 0x0000_0000_0000_ffff_0000_0000_0000_ffff);
    x = ((x << 8) & 0x00ff_0000_00ff_0000_00ff_0000_00ff_0000)
        | (x & 0x0000_00ff_0000_00ff_0000_00ff_0000_00ff);
    x = ((x << 4) & 0x0f00_0f00_0f00_0f00_0f00_0f00_0f00_0f00)
        | (x & 0x000f_000f_000f_000f_000f_000f_000f_000f);

    // lanes holding 10..=15 get bit 4 set by adding 6; they need 'a' - '0' - 10 on top of '0'
    let letters = ((x + LANES * 0x06) >> 4) & LANES;
    x + LANES * b'0' as u128 + letters * 0x27
}
