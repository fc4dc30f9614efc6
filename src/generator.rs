//! Random and time-ordered GUID generation.

use crate::error::TimestampRangeError;
use crate::Guid;

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

impl Guid {
    /// Creates a UUIDv4 from 16 random bytes, overwriting the version and variant bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::{Guid, Variant};
    ///
    /// let x = Guid::from_random_v4([0xff; 16]);
    /// assert_eq!(x.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// assert_eq!(x.variant(), Variant::Var10);
    /// ```
    pub fn from_random_v4(random_bytes: [u8; 16]) -> Self {
        Self::from_bytes_le(random_bytes).with_version(4)
    }

    /// Creates a UUIDv7 from 16 random bytes and a Unix timestamp in milliseconds.
    ///
    /// The 48-bit `unix_ts_ms` takes the place of the fields `a` and `b`, so that the big-endian
    /// form starts with the big-endian timestamp. Bits above the lower 48 are discarded.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `unix_ts_ms` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::Guid;
    ///
    /// let x = Guid::from_random_v7([0; 16], 0x0123_4567_89ab)?;
    /// assert_eq!(x.to_string(), "01234567-89ab-7000-8000-000000000000");
    /// assert!(Guid::from_random_v7([0; 16], -1).is_err());
    /// # Ok::<(), guid::TimestampRangeError>(())
    /// ```
    pub fn from_random_v7(
        random_bytes: [u8; 16],
        unix_ts_ms: i64,
    ) -> Result<Self, TimestampRangeError> {
        if unix_ts_ms < 0 {
            return Err(TimestampRangeError { unix_ts_ms });
        }
        Ok(Self::from_random_v4(random_bytes)
            .with_leading_48_bits(unix_ts_ms as u64)
            .with_version(7))
    }
}

/// Represents a GUID generator that draws random bits from a [`RandSource`].
///
/// Identifiers generated within the same millisecond are ordered only by their random bits; the
/// generator keeps no counter between calls.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use guid::Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v7(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Guid {
        Guid::from_random_v4(self.random_bytes())
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `unix_ts_ms` is negative.
    pub fn generate_v7_at(&mut self, unix_ts_ms: i64) -> Result<Guid, TimestampRangeError> {
        if unix_ts_ms < 0 {
            return Err(TimestampRangeError { unix_ts_ms });
        }
        Guid::from_random_v7(self.random_bytes(), unix_ts_ms)
    }

    fn random_bytes(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Generator, RandSource};
    use crate::error::TimestampRangeError;
    use crate::Guid;
    use std::{iter, time};

    impl<R: RandSource> Generator<R> {
        /// Generates a new UUIDv7 object from a system time.
        ///
        /// # Errors
        ///
        /// Returns `Err` if `time` is earlier than the Unix epoch by a millisecond or more.
        pub fn generate_v7_from(
            &mut self,
            time: time::SystemTime,
        ) -> Result<Guid, TimestampRangeError> {
            let unix_ts_ms = match time.duration_since(time::UNIX_EPOCH) {
                Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
                Err(err) => {
                    i64::try_from(err.duration().as_millis()).map_or(i64::MIN, |ms| -ms)
                }
            };
            self.generate_v7_at(unix_ts_ms)
        }

        /// Generates a new UUIDv7 object from the current timestamp.
        ///
        /// # Panics
        ///
        /// Panics if the system clock reports a time before the Unix epoch.
        pub fn generate_v7(&mut self) -> Guid {
            self.generate_v7_from(time::SystemTime::now())
                .expect("clock may have gone backwards")
        }
    }

    /// Supports operations as an infinite iterator that produces a new UUIDv7 object for each
    /// call of `next()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid::Generator;
    ///
    /// Generator::with_rand08(rand::thread_rng())
    ///     .enumerate()
    ///     .skip(4)
    ///     .take(4)
    ///     .for_each(|(i, e)| println!("[{}] {}", i, e));
    /// ```
    impl<R: RandSource> Iterator for Generator<R> {
        type Item = Guid;

        fn next(&mut self) -> Option<Self::Item> {
            Some(self.generate_v7())
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX, None)
        }
    }

    impl<R: RandSource> iter::FusedIterator for Generator<R> {}
}
