//! Rangefinder state
//!
//! The last accepted distance and the status derived from it.

pub mod status;

pub use status::{RangeStatus, RangefinderState, MAX_VALID_COUNT};
