//! Sensor abstraction traits
//!
//! These traits define the interface between the sensor framework and
//! concrete rangefinder backends.

pub mod rangefinder;

pub use rangefinder::Rangefinder;
