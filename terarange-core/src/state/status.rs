//! Range status evaluation
//!
//! A reading is only useful to the consumer if it lies inside the range the
//! sensor can actually measure. Every accepted reading is classified here,
//! and a short run of consecutive good readings is counted so consumers
//! can wait for the sensor to settle.

use crate::config::RangefinderConfig;

/// Saturation limit for [`RangefinderState::range_valid_count`]
pub const MAX_VALID_COUNT: u8 = 10;

/// Rangefinder status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeStatus {
    /// No sensor attached
    #[default]
    NotConnected,
    /// Sensor attached but no recent reading
    NoData,
    /// Reading below the configured minimum
    OutOfRangeLow,
    /// Reading above the configured maximum
    OutOfRangeHigh,
    /// Reading within range
    Good,
}

impl RangeStatus {
    /// Check if the sensor has produced a recent reading
    pub fn has_data(&self) -> bool {
        !matches!(self, RangeStatus::NotConnected | RangeStatus::NoData)
    }
}

/// Per-sensor state consumed by the sensor framework
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangefinderState {
    /// Last accepted distance
    pub distance_cm: u16,
    /// Time the last distance was accepted
    pub last_reading_ms: u32,
    /// Current status
    pub status: RangeStatus,
    /// Consecutive Good readings, saturating at [`MAX_VALID_COUNT`]
    pub range_valid_count: u8,
}

impl RangefinderState {
    /// State for a sensor that is attached but has not reported yet
    pub fn attached() -> Self {
        Self {
            status: RangeStatus::NoData,
            ..Self::default()
        }
    }

    /// Classify the current distance against the configured limits
    pub fn update_status(&mut self, config: &RangefinderConfig) {
        let status = if self.distance_cm > config.max_distance_cm {
            RangeStatus::OutOfRangeHigh
        } else if self.distance_cm < config.min_distance_cm {
            RangeStatus::OutOfRangeLow
        } else {
            RangeStatus::Good
        };
        self.set_status(status);
    }

    /// Set the status and maintain the valid-reading counter
    pub fn set_status(&mut self, status: RangeStatus) {
        self.status = status;

        if status == RangeStatus::Good {
            if self.range_valid_count < MAX_VALID_COUNT {
                self.range_valid_count += 1;
            }
        } else {
            self.range_valid_count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(distance_cm: u16) -> RangefinderState {
        RangefinderState {
            distance_cm,
            ..RangefinderState::attached()
        }
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(RangefinderState::default().status, RangeStatus::NotConnected);
        assert_eq!(RangefinderState::attached().status, RangeStatus::NoData);
        assert!(!RangeStatus::NoData.has_data());
        assert!(RangeStatus::OutOfRangeHigh.has_data());
    }

    #[test]
    fn test_range_classification() {
        let config = RangefinderConfig::default();

        let mut state = state_at(10);
        state.update_status(&config);
        assert_eq!(state.status, RangeStatus::OutOfRangeLow);

        let mut state = state_at(20);
        state.update_status(&config);
        assert_eq!(state.status, RangeStatus::Good);

        let mut state = state_at(1400);
        state.update_status(&config);
        assert_eq!(state.status, RangeStatus::Good);

        let mut state = state_at(1401);
        state.update_status(&config);
        assert_eq!(state.status, RangeStatus::OutOfRangeHigh);
    }

    #[test]
    fn test_valid_count_saturates() {
        let config = RangefinderConfig::default();
        let mut state = state_at(100);

        for _ in 0..15 {
            state.update_status(&config);
        }
        assert_eq!(state.range_valid_count, MAX_VALID_COUNT);
    }

    #[test]
    fn test_valid_count_resets() {
        let config = RangefinderConfig::default();
        let mut state = state_at(100);
        state.update_status(&config);
        state.update_status(&config);
        assert_eq!(state.range_valid_count, 2);

        state.set_status(RangeStatus::NoData);
        assert_eq!(state.range_valid_count, 0);
        assert_eq!(state.distance_cm, 100);
    }
}
