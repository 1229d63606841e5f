//! Rangefinder backend trait

use crate::state::{RangeStatus, RangefinderState};

/// Trait for distance sensors
///
/// The sensor framework calls [`Rangefinder::update`] once per scheduler
/// tick and reads the result back through the accessors. Implementations
/// must not block inside `update`.
pub trait Rangefinder {
    /// Run one update cycle
    ///
    /// Consumes whatever input the sensor has produced since the last call
    /// and refreshes the state.
    fn update(&mut self);

    /// Current sensor state
    fn state(&self) -> &RangefinderState;

    /// Last accepted distance in centimeters
    fn distance_cm(&self) -> u16 {
        self.state().distance_cm
    }

    /// Current status
    fn status(&self) -> RangeStatus {
        self.state().status
    }

    /// Check if the distance is backed by a recent reading
    fn has_data(&self) -> bool {
        self.status().has_data()
    }
}
