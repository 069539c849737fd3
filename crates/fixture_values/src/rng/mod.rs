//! # Random Source for Fixture Generation
//!
//! Every [`ValueContainer`](crate::ValueContainer) owns a [`FixtureRng`].
//! Generators and `shuffle` draw from it instead of a process-wide source,
//! so a test that wants reproducible fixtures seeds the container and gets
//! the same values on every run.
//!
//! ## Usage Example
//!
//! ```rust
//! use fixture_values::rng::FixtureRng;
//!
//! let mut rng = FixtureRng::from_seed(12345);
//!
//! // Uniform in [0, 1)
//! let u = rng.gen_uniform_f64();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Uniform in [0, 10)
//! let k = rng.gen_below_i32(10);
//! assert!((0..10).contains(&k));
//! ```

mod prng;

pub use prng::FixtureRng;
