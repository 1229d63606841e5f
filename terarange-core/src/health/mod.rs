//! Reading health monitoring
//!
//! Tolerates short dropouts and flags the sensor once it goes quiet.

pub mod staleness;

pub use staleness::{Health, StalenessTracker, READING_TIMEOUT_MS};
