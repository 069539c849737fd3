//! # Fixture Values
//!
//! Test-support store for heterogeneous scalar fixtures with parallel,
//! type-checked extraction.
//!
//! ## Components
//!
//! - [`transfer`]: fork-join primitive applying a per-index operation over
//!   an index range, one Rayon task per chunk, no early global abort
//! - [`extract`]: all-or-nothing conversion of mixed values into a `Vec<T>`
//! - [`container`]: [`ValueContainer`], the ordered value store, plus the
//!   patterned generators (`add_consecutive_*`, `add_sparse_*`, ...)
//! - [`rng`]: [`FixtureRng`](rng::FixtureRng), the seedable random source
//!   each container owns
//! - [`config`]: [`FixtureConfig`] builder
//!
//! ## Usage Example
//!
//! ```rust
//! use fixture_values::ValueContainer;
//!
//! let mut fixture = ValueContainer::with_seed(42);
//! fixture
//!     .add_consecutive_i32(0, 100)
//!     .unwrap()
//!     .add_uniform_i32(100, 10)
//!     .unwrap()
//!     .shuffle();
//!
//! let ints = fixture.get_all_i32().expect("only i32 values were added");
//! assert_eq!(ints.len(), 200);
//!
//! // A single value of another kind makes typed extraction absent.
//! fixture.push(true);
//! assert!(fixture.get_all_i32().is_none());
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `debug`/`trace` level and a `warn`
//! when a generator rejects its arguments. Install a subscriber in the test
//! binary to see them.

pub mod config;
pub mod container;
pub mod error;
pub mod extract;
pub mod rng;
pub mod transfer;
pub mod value;

pub use config::{FixtureConfig, FixtureConfigBuilder, MAX_INITIAL_CAPACITY};
pub use container::{ValueContainer, ALPHABET};
pub use error::{FixtureError, Result};
pub use extract::extract_all;
pub use rng::FixtureRng;
pub use transfer::{transfer, transfer_into, Chunk, ChunkPlan};
pub use value::{Scalar, ScalarKind, Value};
