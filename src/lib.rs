//! A 128-bit GUID value type with five text formats and UUID version 7 generation
//!
//! ```rust
//! use guid::{guid7, Format, Guid};
//!
//! let guid = guid7();
//! println!("{}", guid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{}", guid.encode_as(Format::B)); // e.g. "{01809424-3e59-7c05-9219-566f82fff672}"
//! println!("{:?}", guid.to_bytes_be()); // as 16-byte big-endian array
//!
//! let x = Guid::parse("{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}")?;
//! assert_eq!(x, Guid::parse("  D85B1407-351D-4694-9392-03ACC5870EB1  ")?);
//! assert_eq!(x.to_string(), "d85b1407-351d-4694-9392-03acc5870eb1");
//! # Ok::<(), guid::ParseError>(())
//! ```
//!
//! # Field and byte layout
//!
//! A GUID consists of a 32-bit field `a`, two 16-bit fields `b` and `c` and eight bytes `d`
//! through `k`. The 16-byte binary form comes in two layouts:
//!
//! - the legacy mixed-endian layout ([`Guid::to_bytes_le`]), where `a`, `b` and `c` are
//!   little-endian; this is also the in-memory storage layout;
//! - the big-endian layout of RFC 9562 ([`Guid::to_bytes_be`]), which matches the order of the
//!   hexadecimal digits in the text forms.
//!
//! The trailing eight bytes are identical in both layouts. Ordering compares `a`, `b`, `c` and
//! then `d` through `k` as unsigned integers.
//!
//! # Text formats
//!
//! | Format | Example                                                                |
//! | ------ | ---------------------------------------------------------------------- |
//! | `N`    | `d85b1407351d4694939203acc5870eb1`                                     |
//! | `D`    | `d85b1407-351d-4694-9392-03acc5870eb1`                                 |
//! | `B`    | `{d85b1407-351d-4694-9392-03acc5870eb1}`                               |
//! | `P`    | `(d85b1407-351d-4694-9392-03acc5870eb1)`                               |
//! | `X`    | `{0xd85b1407,0x351d,0x4694,{0x93,0x92,0x03,0xac,0xc5,0x87,0x0e,0xb1}}` |
//!
//! [`Guid::parse`] detects the format, [`Guid::parse_exact`] requires the one given, and both
//! accept UTF-8 (`str`, `[u8]`) or UTF-16 (`[u16]`) input. Formatting always produces lowercase
//! digits.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables the integration with Rust's standard library.
//! - `global_gen` enables the process-wide default generator behind [`guid7()`] and
//!   [`guid4()`].
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Guid`] objects.
//! - `uuid` enables the conversion between [`Guid`] and `uuid::Uuid` objects.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{
    FormatSpecError, InvalidLengthError, ParseError, ParseErrorKind, TimestampRangeError,
};

mod text;
pub use text::{CodeUnit, Format, GuidText, Utf8Chars};

mod id;
pub use id::{Guid, Variant};

mod parse;

mod format;
pub use format::Encoded;

pub mod generator;
pub use generator::{Generator, RandSource};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{guid4, guid7};
