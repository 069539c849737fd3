//! Patterned fixture generators.
//!
//! Every generator appends to the container and returns it for chaining.
//! Generators that can reject their arguments return a [`Result`] and leave
//! the container untouched on error.

use tracing::warn;

use super::ValueContainer;
use crate::error::{FixtureError, Result};
use crate::rng::FixtureRng;
use crate::value::Value;

/// Characters drawn by [`ValueContainer::add_string_of_length`].
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn random_string(rng: &mut FixtureRng, length: usize) -> String {
    (0..length)
        .map(|_| char::from(ALPHABET[rng.gen_index(ALPHABET.len())]))
        .collect()
}

impl ValueContainer {
    /// Appends `start, start + 1, ..., start + count - 1` as `i32`.
    ///
    /// # Errors
    ///
    /// [`FixtureError::ConsecutiveOverflow`] if the last value exceeds
    /// `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixture_values::ValueContainer;
    ///
    /// let mut c = ValueContainer::new();
    /// c.add_consecutive_i32(5, 3).unwrap();
    /// assert_eq!(c.get_all_i32(), Some(vec![5, 6, 7]));
    /// ```
    pub fn add_consecutive_i32(&mut self, start: i32, count: usize) -> Result<&mut Self> {
        if count == 0 {
            return Ok(self);
        }
        let last = i32::try_from(count - 1)
            .ok()
            .and_then(|span| start.checked_add(span))
            .ok_or_else(|| {
                warn!(start, count, "consecutive i32 run overflows");
                FixtureError::ConsecutiveOverflow {
                    start: start.into(),
                    count,
                    kind: "i32",
                }
            })?;
        Ok(self.put(start..=last))
    }

    /// Appends `start, start + 1, ..., start + count - 1` as `i64`.
    ///
    /// # Errors
    ///
    /// [`FixtureError::ConsecutiveOverflow`] if the last value exceeds
    /// `i64::MAX`.
    pub fn add_consecutive_i64(&mut self, start: i64, count: usize) -> Result<&mut Self> {
        if count == 0 {
            return Ok(self);
        }
        let last = i64::try_from(count - 1)
            .ok()
            .and_then(|span| start.checked_add(span))
            .ok_or_else(|| {
                warn!(start, count, "consecutive i64 run overflows");
                FixtureError::ConsecutiveOverflow {
                    start,
                    count,
                    kind: "i64",
                }
            })?;
        Ok(self.put(start..=last))
    }

    /// Appends `count` `i32`s drawn uniformly over the full range.
    pub fn add_sparse_i32(&mut self, count: usize) -> &mut Self {
        self.append_with(count, |rng| Value::I32(rng.gen_full()))
    }

    /// Appends `count` `i64`s drawn uniformly over the full range.
    pub fn add_sparse_i64(&mut self, count: usize) -> &mut Self {
        self.append_with(count, |rng| Value::I64(rng.gen_full()))
    }

    /// Appends `count` `u32`s drawn uniformly over the full range.
    pub fn add_sparse_u32(&mut self, count: usize) -> &mut Self {
        self.append_with(count, |rng| Value::U32(rng.gen_full()))
    }

    /// Appends `count` `u64`s drawn uniformly over the full range.
    pub fn add_sparse_u64(&mut self, count: usize) -> &mut Self {
        self.append_with(count, |rng| Value::U64(rng.gen_full()))
    }

    /// Appends `count` `f32`s drawn uniformly from [0, 1).
    pub fn add_sparse_f32(&mut self, count: usize) -> &mut Self {
        self.append_with(count, |rng| Value::F32(rng.gen_uniform_f32()))
    }

    /// Appends `count` `f64`s drawn uniformly from [0, 1).
    pub fn add_sparse_f64(&mut self, count: usize) -> &mut Self {
        self.append_with(count, |rng| Value::F64(rng.gen_uniform_f64()))
    }

    /// Appends `count` `i32`s drawn uniformly from [0, modulus).
    ///
    /// # Errors
    ///
    /// [`FixtureError::InvalidModulus`] if `modulus <= 0`.
    pub fn add_uniform_i32(&mut self, count: usize, modulus: i32) -> Result<&mut Self> {
        if modulus <= 0 {
            warn!(modulus, "uniform i32 generator needs a positive modulus");
            return Err(FixtureError::InvalidModulus {
                modulus: modulus.into(),
            });
        }
        Ok(self.append_with(count, |rng| Value::I32(rng.gen_below_i32(modulus))))
    }

    /// Appends `count` `i64`s drawn uniformly from [0, modulus).
    ///
    /// # Errors
    ///
    /// [`FixtureError::InvalidModulus`] if `modulus <= 0`.
    pub fn add_uniform_i64(&mut self, count: usize, modulus: i64) -> Result<&mut Self> {
        if modulus <= 0 {
            warn!(modulus, "uniform i64 generator needs a positive modulus");
            return Err(FixtureError::InvalidModulus { modulus });
        }
        Ok(self.append_with(count, |rng| Value::I64(rng.gen_below_i64(modulus))))
    }

    /// Appends `value` `count` times.
    pub fn add_identical_bool(&mut self, value: bool, count: usize) -> &mut Self {
        self.put(std::iter::repeat(value).take(count))
    }

    /// Appends `count` random strings of exactly `length` ASCII letters.
    pub fn add_string_of_length(&mut self, count: usize, length: usize) -> &mut Self {
        self.append_with(count, |rng| Value::Str(random_string(rng, length)))
    }
}
