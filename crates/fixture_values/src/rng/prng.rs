//! Seedable pseudo-random source wrapper.

use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Random source owned by a fixture container.
///
/// Wraps [`StdRng`] and remembers the seed it was built from, if any, so a
/// failing test can log the seed and replay the exact fixture.
///
/// # Examples
///
/// ```rust
/// use fixture_values::rng::FixtureRng;
///
/// let mut a = FixtureRng::from_seed(42);
/// let mut b = FixtureRng::from_seed(42);
/// assert_eq!(a.gen_full::<u64>(), b.gen_full::<u64>());
/// assert_eq!(a.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct FixtureRng {
    inner: StdRng,
    /// `None` when initialised from OS entropy.
    seed: Option<u64>,
}

impl FixtureRng {
    /// Creates a random source initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a random source initialised from OS entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed used for initialisation, if one was given.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws a value uniformly over the full range of `T`.
    ///
    /// For integers this is every representable value; for `f32`/`f64` it is
    /// the half-open interval [0, 1).
    #[inline]
    pub fn gen_full<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.inner.gen()
    }

    /// Draws a uniform `f32` in [0, 1).
    #[inline]
    pub fn gen_uniform_f32(&mut self) -> f32 {
        self.inner.gen()
    }

    /// Draws a uniform `f64` in [0, 1).
    #[inline]
    pub fn gen_uniform_f64(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Draws a uniform `i32` in [0, modulus).
    ///
    /// # Panics
    ///
    /// Panics if `modulus <= 0`. Callers validate the bound first.
    #[inline]
    pub fn gen_below_i32(&mut self, modulus: i32) -> i32 {
        self.inner.gen_range(0..modulus)
    }

    /// Draws a uniform `i64` in [0, modulus).
    ///
    /// # Panics
    ///
    /// Panics if `modulus <= 0`. Callers validate the bound first.
    #[inline]
    pub fn gen_below_i64(&mut self, modulus: i64) -> i64 {
        self.inner.gen_range(0..modulus)
    }

    /// Draws a uniform index in [0, len).
    ///
    /// # Panics
    ///
    /// Panics if `len == 0`.
    #[inline]
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Permutes `items` uniformly in place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

impl Default for FixtureRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
