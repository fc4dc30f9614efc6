#[cfg(not(feature = "std"))]
use core as std;

use crate::error::InvalidLengthError;
use std::{cmp, hash};

/// Represents a 128-bit Globally Unique IDentifier.
///
/// The value is stored as 16 bytes in the legacy mixed-endian layout: the 32-bit field `a`,
/// and the 16-bit fields `b` and `c` are little-endian, while the eight trailing bytes `d`
/// through `k` are kept in their textual order. The layout is fixed and does not depend on the
/// host byte order.
///
/// ```text
///  bytes:  0  1  2  3 | 4  5 | 6  7 | 8 | 9 | 10 11 12 13 14 15
///  field:  a (LE)     | b LE | c LE | d | e | f  g  h  i  j  k
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Guid([u8; 16]);

/// The variant field of a GUID, i.e. the top bits of the byte `d`.
///
/// The discriminant of each variant equals its bit pattern, so `Variant::Var10 as u8 == 2`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility (including the Nil GUID).
    Var0 = 0b0,
    /// `10xx`: the variant specified by RFC 9562.
    Var10 = 0b10,
    /// `110x`: reserved for Microsoft backward compatibility.
    Var110 = 0b110,
    /// `111x`: reserved for future definition (including the Max GUID).
    Var111 = 0b111,
}

impl Guid {
    /// Nil GUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max GUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array in the mixed-endian storage layout.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a GUID from 16 bytes in the legacy layout, where `a`, `b` and `c` are
    /// little-endian.
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a GUID from 16 bytes in the RFC 9562 big-endian layout.
    pub const fn from_bytes_be(bytes: [u8; 16]) -> Self {
        Self(swap_leading_fields(bytes))
    }

    /// Creates a GUID from 16 bytes, treating `a`, `b` and `c` as big-endian if `big_endian` is
    /// `true` and as little-endian otherwise.
    pub const fn from_bytes(bytes: [u8; 16], big_endian: bool) -> Self {
        if big_endian {
            Self::from_bytes_be(bytes)
        } else {
            Self::from_bytes_le(bytes)
        }
    }

    /// Creates a GUID from a byte slice in the legacy little-endian layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, InvalidLengthError> {
        Self::from_slice_endian(bytes, false)
    }

    /// Creates a GUID from a byte slice in the layout selected by `big_endian`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::Guid;
    ///
    /// let bytes = [
    ///     0xd8, 0x5b, 0x14, 0x07, 0x35, 0x1d, 0x46, 0x94,
    ///     0x93, 0x92, 0x03, 0xac, 0xc5, 0x87, 0x0e, 0xb1,
    /// ];
    /// let x = Guid::from_slice_endian(&bytes, true)?;
    /// assert_eq!(x.to_string(), "d85b1407-351d-4694-9392-03acc5870eb1");
    /// assert!(Guid::from_slice_endian(&bytes[1..], true).is_err());
    /// # Ok::<(), guid::InvalidLengthError>(())
    /// ```
    pub fn from_slice_endian(bytes: &[u8], big_endian: bool) -> Result<Self, InvalidLengthError> {
        <[u8; 16]>::try_from(bytes)
            .map(|e| Self::from_bytes(e, big_endian))
            .map_err(|_| InvalidLengthError {
                expected: 16,
                actual: bytes.len(),
            })
    }

    /// Creates a GUID from its 11 fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::Guid;
    ///
    /// let x = Guid::from_fields(
    ///     0xd85b1407, 0x351d, 0x4694, 0x93, 0x92, 0x03, 0xac, 0xc5, 0x87, 0x0e, 0xb1,
    /// );
    /// assert_eq!(x.to_string(), "d85b1407-351d-4694-9392-03acc5870eb1");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub const fn from_fields(
        a: u32,
        b: u16,
        c: u16,
        d: u8,
        e: u8,
        f: u8,
        g: u8,
        h: u8,
        i: u8,
        j: u8,
        k: u8,
    ) -> Self {
        let a = a.to_le_bytes();
        let b = b.to_le_bytes();
        let c = c.to_le_bytes();
        Self([
            a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], d, e, f, g, h, i, j, k,
        ])
    }

    /// Creates a GUID from its 11 fields with the leading three given as signed integers.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_signed_fields(
        a: i32,
        b: i16,
        c: i16,
        d: u8,
        e: u8,
        f: u8,
        g: u8,
        h: u8,
        i: u8,
        j: u8,
        k: u8,
    ) -> Self {
        Self::from_fields(a as u32, b as u16, c as u16, d, e, f, g, h, i, j, k)
    }

    /// Creates a GUID from the signed fields `a`, `b` and `c` and a slice of the eight trailing
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `tail` is not exactly 8 bytes long.
    pub fn from_parts(a: i32, b: i16, c: i16, tail: &[u8]) -> Result<Self, InvalidLengthError> {
        let [d, e, f, g, h, i, j, k] = <[u8; 8]>::try_from(tail).map_err(|_| InvalidLengthError {
            expected: 8,
            actual: tail.len(),
        })?;
        Ok(Self::from_signed_fields(a, b, c, d, e, f, g, h, i, j, k))
    }

    /// Returns the 16 bytes in the legacy layout, where `a`, `b` and `c` are little-endian.
    pub const fn to_bytes_le(&self) -> [u8; 16] {
        self.0
    }

    /// Returns the 16 bytes in the RFC 9562 big-endian layout.
    pub const fn to_bytes_be(&self) -> [u8; 16] {
        swap_leading_fields(self.0)
    }

    /// Returns the 16 bytes in the layout selected by `big_endian`.
    pub const fn to_bytes(&self, big_endian: bool) -> [u8; 16] {
        if big_endian {
            self.to_bytes_be()
        } else {
            self.to_bytes_le()
        }
    }

    /// Writes the 16 bytes in the layout selected by `big_endian` to the head of `dest`,
    /// returning the number of bytes written.
    ///
    /// Returns `None` and leaves `dest` untouched if it is shorter than 16 bytes.
    pub fn try_write_bytes(&self, dest: &mut [u8], big_endian: bool) -> Option<usize> {
        let head = dest.get_mut(..16)?;
        head.copy_from_slice(&self.to_bytes(big_endian));
        Some(16)
    }

    /// Returns the field `a`.
    pub const fn a(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the field `b`.
    pub const fn b(&self) -> u16 {
        u16::from_le_bytes([self.0[4], self.0[5]])
    }

    /// Returns the field `c`, whose top four bits carry the version.
    pub const fn c(&self) -> u16 {
        u16::from_le_bytes([self.0[6], self.0[7]])
    }

    /// Returns the byte `d`, whose top bits carry the variant.
    pub const fn d(&self) -> u8 {
        self.0[8]
    }

    /// Returns the byte `e`.
    pub const fn e(&self) -> u8 {
        self.0[9]
    }

    /// Returns the byte `f`.
    pub const fn f(&self) -> u8 {
        self.0[10]
    }

    /// Returns the byte `g`.
    pub const fn g(&self) -> u8 {
        self.0[11]
    }

    /// Returns the byte `h`.
    pub const fn h(&self) -> u8 {
        self.0[12]
    }

    /// Returns the byte `i`.
    pub const fn i(&self) -> u8 {
        self.0[13]
    }

    /// Returns the byte `j`.
    pub const fn j(&self) -> u8 {
        self.0[14]
    }

    /// Returns the byte `k`.
    pub const fn k(&self) -> u8 {
        self.0[15]
    }

    /// Returns the eight trailing bytes `d` through `k`.
    pub const fn tail(&self) -> [u8; 8] {
        let w = &self.0;
        [w[8], w[9], w[10], w[11], w[12], w[13], w[14], w[15]]
    }

    /// Returns the variant field value of the GUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::{Guid, Variant};
    ///
    /// assert_eq!(Guid::NIL.variant(), Variant::Var0);
    /// assert_eq!(Guid::MAX.variant(), Variant::Var111);
    /// ```
    pub const fn variant(&self) -> Variant {
        match self.d() >> 4 {
            0b0000..=0b0111 => Variant::Var0,
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => Variant::Var111,
        }
    }

    /// Returns the version field value of the GUID, i.e. the top four bits of `c`.
    ///
    /// The value is read as is, regardless of the variant.
    pub const fn version(&self) -> u8 {
        (self.c() >> 12) as u8
    }

    /// Returns the XOR of the four 32-bit words of the storage layout.
    ///
    /// This value backs the [`Hash`](hash::Hash) implementation and is not cryptographic.
    pub const fn hash_code(&self) -> u32 {
        let w = &self.0;
        u32::from_le_bytes([w[0], w[1], w[2], w[3]])
            ^ u32::from_le_bytes([w[4], w[5], w[6], w[7]])
            ^ u32::from_le_bytes([w[8], w[9], w[10], w[11]])
            ^ u32::from_le_bytes([w[12], w[13], w[14], w[15]])
    }

    /// Sets the version and variant bits, keeping the other bits.
    pub(crate) fn with_version(mut self, version: u8) -> Self {
        self.0[7] = (self.0[7] & 0x0f) | (version << 4);
        self.0[8] = (self.0[8] & 0x3f) | 0x80;
        self
    }

    /// Replaces the fields `a` and `b` with the given 48-bit value.
    pub(crate) fn with_leading_48_bits(mut self, value: u64) -> Self {
        self.0[..4].copy_from_slice(&((value >> 16) as u32).to_le_bytes());
        self.0[4..6].copy_from_slice(&(value as u16).to_le_bytes());
        self
    }
}

/// Reverses the byte order of the fields `a`, `b` and `c`, converting between the mixed-endian
/// and big-endian layouts in either direction.
const fn swap_leading_fields(src: [u8; 16]) -> [u8; 16] {
    [
        src[3], src[2], src[1], src[0], src[5], src[4], src[7], src[6], src[8], src[9], src[10],
        src[11], src[12], src[13], src[14], src[15],
    ]
}

impl PartialOrd for Guid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Guid {
    /// Compares the fields `a`, `b`, `c`, `d`, ..., `k` in this order, each as an unsigned
    /// integer.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.a()
            .cmp(&other.a())
            .then_with(|| self.b().cmp(&other.b()))
            .then_with(|| self.c().cmp(&other.c()))
            .then_with(|| self.0[8..].cmp(&other.0[8..]))
    }
}

impl hash::Hash for Guid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl From<Guid> for u128 {
    /// Interprets the RFC 9562 big-endian layout as an integer.
    fn from(src: Guid) -> Self {
        Self::from_be_bytes(src.to_bytes_be())
    }
}

impl From<u128> for Guid {
    fn from(src: u128) -> Self {
        Self::from_bytes_be(src.to_be_bytes())
    }
}

impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for Guid {
    type Error = InvalidLengthError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Guid;

    impl From<Guid> for uuid::Uuid {
        fn from(src: Guid) -> Self {
            uuid::Uuid::from_bytes(src.to_bytes_be())
        }
    }

    impl From<uuid::Uuid> for Guid {
        fn from(src: uuid::Uuid) -> Self {
            Self::from_bytes_be(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Guid;
    use core::fmt;
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Guid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(&self.to_bytes_be())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Guid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Guid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a GUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Guid::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Guid::from_slice_endian(value, true).map_err(de::Error::custom)
        }
    }

}
