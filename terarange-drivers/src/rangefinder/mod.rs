//! Rangefinder backends

pub mod teraranger;

pub use teraranger::{detect, CycleStats, TeraRangerSerial};
