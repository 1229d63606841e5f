//! TeraRanger Serial Protocol
//!
//! The sensor streams fixed-size binary frames, one per measurement:
//! ```text
//! ┌────────┬─────────┬─────────┬──────────┐
//! │ START  │ DATA HI │ DATA LO │ CRC-8    │
//! │ 0x54   │ 1B      │ 1B      │ 1B       │
//! └────────┴─────────┴─────────┴──────────┘
//! ```
//!
//! The data bytes form a big-endian distance in millimeters. The checksum
//! is CRC-8 (polynomial 0x07) over the first three bytes.
//!
//! There is no length field and no addressing; the START byte is the only
//! synchronization point, so a receiver that loses sync simply discards
//! bytes until it sees the next START.

#![no_std]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod checksum;
pub mod frame;

pub use aggregate::Aggregate;
pub use checksum::crc8;
pub use frame::{Frame, FrameError, CHECKED_LEN, FRAME_LEN, FRAME_START};
