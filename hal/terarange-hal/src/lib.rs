//! TeraRange Hardware Abstraction Layer
//!
//! This crate defines the platform traits the rangefinder backend is built
//! on. Boards implement them on top of their UART driver and system timer;
//! tests implement them with in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Sensor framework (update scheduler)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  terarange-drivers (TeraRangerSerial)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  terarange-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::ByteStream`] - Non-blocking serial receive
//! - [`time::Clock`] - Monotonic millisecond clock
//! - [`port::SerialPortProvider`] - Serial port discovery

#![no_std]
#![deny(unsafe_code)]

pub mod port;
pub mod time;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use port::{PortError, PortTable, SerialPortProvider, SerialProtocol};
pub use time::Clock;
pub use uart::{ByteStream, RxBuffer, UartConfig};
