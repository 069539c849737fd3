//! Fixture container configuration.
//!
//! Use [`FixtureConfig::builder`] to construct a validated configuration and
//! pass it to [`ValueContainer::from_config`](crate::ValueContainer::from_config).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

/// Largest initial capacity a configuration may request.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Fixture container configuration.
///
/// # Examples
///
/// ```rust
/// use fixture_values::FixtureConfig;
///
/// let config = FixtureConfig::builder()
///     .seed(42)
///     .initial_capacity(1_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.initial_capacity(), 1_000);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixtureConfig {
    /// Seed for the container's random source; entropy when absent.
    seed: Option<u64>,
    /// Number of value slots reserved up front.
    initial_capacity: usize,
}

impl FixtureConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> FixtureConfigBuilder {
        FixtureConfigBuilder::default()
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the number of value slots reserved up front.
    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidConfig`] if `initial_capacity`
    /// exceeds [`MAX_INITIAL_CAPACITY`].
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(FixtureError::InvalidConfig(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }
}

/// Builder for [`FixtureConfig`].
#[derive(Clone, Debug, Default)]
pub struct FixtureConfigBuilder {
    seed: Option<u64>,
    initial_capacity: usize,
}

impl FixtureConfigBuilder {
    /// Sets the seed for reproducible fixtures.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of value slots reserved up front.
    #[inline]
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<FixtureConfig> {
        let config = FixtureConfig {
            seed: self.seed,
            initial_capacity: self.initial_capacity,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = FixtureConfig::builder().build().unwrap();
        assert_eq!(config.seed(), None);
        assert_eq!(config.initial_capacity(), 0);
        assert_eq!(config, FixtureConfig::default());
    }

    #[test]
    fn test_builder_with_values() {
        let config = FixtureConfig::builder()
            .seed(7)
            .initial_capacity(64)
            .build()
            .unwrap();
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.initial_capacity(), 64);
    }

    #[test]
    fn test_capacity_limit() {
        assert!(FixtureConfig::builder()
            .initial_capacity(MAX_INITIAL_CAPACITY)
            .build()
            .is_ok());

        let err = FixtureConfig::builder()
            .initial_capacity(MAX_INITIAL_CAPACITY + 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, FixtureError::InvalidConfig(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = FixtureConfig::builder().seed(3).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: FixtureConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
