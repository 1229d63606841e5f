//! Configuration type definitions
//!
//! These types represent the rangefinder configuration. With the `serde`
//! feature, configuration is stored in flash as postcard-serialized binary
//! data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::health::READING_TIMEOUT_MS;

/// Default minimum reportable distance in cm
pub const DEFAULT_MIN_DISTANCE_CM: u16 = 20;

/// Default maximum reportable distance in cm
pub const DEFAULT_MAX_DISTANCE_CM: u16 = 1400;

/// Upper bound on the encoded size of [`RangefinderConfig`]
pub const MAX_CONFIG_SIZE: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Minimum distance is not below the maximum
    InvalidRange,
    /// Staleness timeout is zero
    ZeroTimeout,
    /// Serialization failed (buffer too small)
    Encode,
    /// Stored bytes are not a valid configuration
    Decode,
}

/// Rangefinder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangefinderConfig {
    /// Readings below this are reported as OutOfRangeLow
    pub min_distance_cm: u16,
    /// Readings above this are reported as OutOfRangeHigh
    pub max_distance_cm: u16,
    /// Time without a valid frame before the sensor reports NoData
    pub timeout_ms: u32,
    /// Which rangefinder serial port to use (0 = first)
    pub serial_instance: u8,
}

impl Default for RangefinderConfig {
    fn default() -> Self {
        Self {
            min_distance_cm: DEFAULT_MIN_DISTANCE_CM,
            max_distance_cm: DEFAULT_MAX_DISTANCE_CM,
            timeout_ms: READING_TIMEOUT_MS,
            serial_instance: 0,
        }
    }
}

impl RangefinderConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_distance_cm >= self.max_distance_cm {
            return Err(ConfigError::InvalidRange);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Serialize into `buffer`, returning the number of bytes written
    #[cfg(feature = "serde")]
    pub fn to_postcard(&self, buffer: &mut [u8]) -> Result<usize, ConfigError> {
        postcard::to_slice(self, buffer)
            .map(|used| used.len())
            .map_err(|_| ConfigError::Encode)
    }

    /// Deserialize and validate a stored configuration
    #[cfg(feature = "serde")]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
