//! Board-agnostic core logic for the rangefinder backend
//!
//! This crate contains everything that does not touch a serial port:
//!
//! - The [`traits::Rangefinder`] interface the sensor framework polls
//! - Sensor state and range status evaluation
//! - Staleness tracking for dropped readings
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod health;
pub mod state;
pub mod traits;
