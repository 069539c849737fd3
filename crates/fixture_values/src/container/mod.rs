//! Ordered heterogeneous value store.
//!
//! A [`ValueContainer`] accumulates [`Value`]s in insertion order and owns
//! the [`FixtureRng`] its generators and `shuffle` draw from. Mutation needs
//! `&mut self`; extraction and cloning take `&self` and run in parallel
//! internally.
//!
//! # Example
//!
//! ```rust
//! use fixture_values::{Value, ValueContainer};
//!
//! let mut c = ValueContainer::with_seed(42);
//! c.put([1i32, 2, 3]).push(4i32);
//!
//! assert_eq!(c.len(), 4);
//! assert_eq!(c.get_all()[3], Value::I32(4));
//! assert_eq!(c.get_all_i32(), Some(vec![1, 2, 3, 4]));
//! ```

mod generators;

pub use generators::ALPHABET;

use tracing::debug;

use crate::config::FixtureConfig;
use crate::rng::FixtureRng;
use crate::transfer::transfer_into;
use crate::value::{ScalarKind, Value};

/// Ordered, growable store of heterogeneous scalar values.
#[derive(Debug)]
pub struct ValueContainer {
    values: Vec<Value>,
    rng: FixtureRng,
}

impl ValueContainer {
    /// Creates an empty container with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(FixtureRng::from_entropy())
    }

    /// Creates an empty container whose generators replay from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(FixtureRng::from_seed(seed))
    }

    /// Creates an empty container drawing from `rng`.
    pub fn with_rng(rng: FixtureRng) -> Self {
        Self {
            values: Vec::new(),
            rng,
        }
    }

    /// Creates an empty container with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            rng: FixtureRng::from_entropy(),
        }
    }

    /// Creates an empty container from a validated configuration.
    pub fn from_config(config: &FixtureConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => FixtureRng::from_seed(seed),
            None => FixtureRng::from_entropy(),
        };
        Self {
            values: Vec::with_capacity(config.initial_capacity()),
            rng,
        }
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values the container can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// The container's random source.
    #[inline]
    pub fn rng(&self) -> &FixtureRng {
        &self.rng
    }

    /// Appends `values` in iteration order.
    pub fn put<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let before = self.values.len();
        self.values.extend(values.into_iter().map(Into::into));
        debug!(added = self.values.len() - before, len = self.values.len(), "put");
        self
    }

    /// Appends a single value.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    /// All values in insertion order.
    #[inline]
    pub fn get_all(&self) -> &[Value] {
        &self.values
    }

    /// Iterates over the values in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Kind tag of every value, in order.
    pub fn kinds(&self) -> Vec<ScalarKind> {
        self.values.iter().map(Value::kind).collect()
    }

    /// Returns `true` if every value is of `kind` (vacuously for empty).
    pub fn is_homogeneous(&self, kind: ScalarKind) -> bool {
        self.values.iter().all(|v| v.kind() == kind)
    }

    /// Permutes the values uniformly in place.
    pub fn shuffle(&mut self) -> &mut Self {
        self.rng.shuffle(&mut self.values);
        self
    }

    /// Removes every value, keeping the allocated capacity.
    pub fn clear(&mut self) -> &mut Self {
        self.values.clear();
        self
    }

    /// Appends `count` values produced by `draw`.
    fn append_with<F>(&mut self, count: usize, mut draw: F) -> &mut Self
    where
        F: FnMut(&mut FixtureRng) -> Value,
    {
        let rng = &mut self.rng;
        self.values.reserve(count);
        self.values.extend((0..count).map(|_| draw(rng)));
        debug!(added = count, len = self.values.len(), "generated");
        self
    }
}

impl Default for ValueContainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the values with a parallel transfer. The clone's random source
/// continues from the same state as the original's.
impl Clone for ValueContainer {
    fn clone(&self) -> Self {
        let mut slots: Vec<Option<Value>> = vec![None; self.values.len()];
        let copied = transfer_into(&mut slots, |i, slot| {
            *slot = Some(self.values[i].clone());
            true
        });
        debug_assert!(copied);
        Self {
            values: slots.into_iter().flatten().collect(),
            rng: self.rng.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a ValueContainer {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<V: Into<Value>> Extend<V> for ValueContainer {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.put(iter);
    }
}
