//! Staleness tracker implementation
//!
//! Remembers when the last valid reading arrived and decides, on cycles
//! that produced nothing, whether the sensor should be considered silent.

/// Time without a valid reading before the sensor is flagged NoData
pub const READING_TIMEOUT_MS: u32 = 200;

/// Reading freshness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Health {
    /// A reading arrived within the timeout
    Valid,
    /// No reading yet, or the last one is too old
    NoData,
}

/// Staleness tracker
///
/// Starts in [`Health::NoData`]. Timestamps are compared with wrapping
/// subtraction so the tracker survives the millisecond counter rolling
/// over.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StalenessTracker {
    /// Time of the last accepted reading
    last_reading_ms: Option<u32>,
    /// Allowed silence before NoData
    timeout_ms: u32,
    /// Current verdict
    health: Health,
}

impl Default for StalenessTracker {
    fn default() -> Self {
        Self::new(READING_TIMEOUT_MS)
    }
}

impl StalenessTracker {
    /// Create a tracker with the given timeout
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            last_reading_ms: None,
            timeout_ms,
            health: Health::NoData,
        }
    }

    /// Record a valid reading taken at `now_ms`
    pub fn record_reading(&mut self, now_ms: u32) {
        self.last_reading_ms = Some(now_ms);
        self.health = Health::Valid;
    }

    /// Evaluate a cycle that produced no reading
    ///
    /// Downgrades to NoData once more than the timeout has elapsed since
    /// the last reading. Within the timeout the current health is kept.
    pub fn check(&mut self, now_ms: u32) -> Health {
        match self.elapsed_ms(now_ms) {
            Some(elapsed) if elapsed <= self.timeout_ms => {}
            _ => self.health = Health::NoData,
        }
        self.health
    }

    /// Time since the last reading, if there was one
    pub fn elapsed_ms(&self, now_ms: u32) -> Option<u32> {
        self.last_reading_ms.map(|last| now_ms.wrapping_sub(last))
    }

    /// Time of the last reading
    pub fn last_reading_ms(&self) -> Option<u32> {
        self.last_reading_ms
    }

    /// Current health
    pub fn health(&self) -> Health {
        self.health
    }

    /// Configured timeout
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}
