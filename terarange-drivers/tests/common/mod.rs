//! Shared fakes for driver integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;

use proptest::prelude::*;
use terarange_hal::{ByteStream, Clock};
use terarange_protocol::{Frame, FRAME_START};

/// In-memory byte stream
#[derive(Debug, Default)]
pub struct MemStream {
    bytes: VecDeque<u8>,
}

impl MemStream {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
        }
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn remaining(&self) -> Vec<u8> {
        self.bytes.iter().copied().collect()
    }
}

impl ByteStream for MemStream {
    type Error = ();

    fn available(&self) -> usize {
        self.bytes.len()
    }

    fn read_byte(&mut self) -> Result<u8, ()> {
        self.bytes.pop_front().ok_or(())
    }
}

/// Manually advanced clock
#[derive(Debug, Default)]
pub struct FakeClock(Cell<u32>);

impl FakeClock {
    pub fn at(ms: u32) -> Self {
        Self(Cell::new(ms))
    }

    pub fn set(&self, ms: u32) {
        self.0.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

/// Encoded frame for `value` millimeters
pub fn frame(value: u16) -> [u8; 4] {
    Frame::new(value).to_bytes()
}

/// Bytes that can never start a frame
pub fn noise() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>().prop_filter("not START", |b| *b != FRAME_START), 0..8)
}
