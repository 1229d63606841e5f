//! Per-cycle measurement averaging

/// Running sum and count of the measurements accepted in one update cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Aggregate {
    sum: u64,
    count: u32,
}

impl Aggregate {
    /// Create an empty aggregate
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    /// Add one measurement (millimeters)
    pub fn push(&mut self, value_mm: u16) {
        self.sum += u64::from(value_mm);
        self.count += 1;
    }

    /// Number of measurements accepted
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Sum of accepted measurements in millimeters
    pub const fn sum(&self) -> u64 {
        self.sum
    }

    /// Check if nothing was accepted
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Averaged distance in whole centimeters
    ///
    /// `(sum / count) / 10` with the fraction truncated. Computed as
    /// `sum / (count * 10)`, which is the same value for non-negative
    /// integers and needs no floating point.
    ///
    /// Returns `None` when no measurement was accepted.
    pub fn distance_cm(&self) -> Option<u16> {
        if self.count == 0 {
            return None;
        }

        // Mean of u16 values divided by 10 always fits in u16
        Some((self.sum / (u64::from(self.count) * 10)) as u16)
    }
}
