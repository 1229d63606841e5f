//! Rangefinder backend implementations
//!
//! This crate provides concrete implementations of the
//! [`terarange_core::traits::Rangefinder`] trait on top of the
//! `terarange-hal` platform traits:
//!
//! - TeraRanger serial (binary 4-byte frames, CRC-8)

#![no_std]
#![deny(unsafe_code)]

pub mod rangefinder;
