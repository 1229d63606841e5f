//! Frame encoding and decoding for the TeraRanger serial protocol.
//!
//! Frame format:
//! - START (1 byte): 0x54 synchronization byte
//! - DATA HI (1 byte): distance bits 15..8
//! - DATA LO (1 byte): distance bits 7..0
//! - CHECKSUM (1 byte): CRC-8 of START, DATA HI and DATA LO

use crate::checksum::crc8;

/// Frame synchronization byte ('T')
pub const FRAME_START: u8 = 0x54;

/// Complete frame size (START + DATA HI + DATA LO + CHECKSUM)
pub const FRAME_LEN: usize = 4;

/// Bytes covered by the checksum
pub const CHECKED_LEN: usize = FRAME_LEN - 1;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// First byte is not [`FRAME_START`]
    InvalidStart,
    /// Checksum mismatch
    InvalidChecksum,
    /// Frame is incomplete (need more bytes)
    Incomplete,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A single distance measurement frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Raw distance in millimeters
    pub value: u16,
}

impl Frame {
    /// Create a frame carrying `value` millimeters
    pub const fn new(value: u16) -> Self {
        Self { value }
    }

    /// Build a frame from already-verified START + data bytes
    pub const fn from_checked(bytes: &[u8; CHECKED_LEN]) -> Self {
        Self {
            value: u16::from_be_bytes([bytes[1], bytes[2]]),
        }
    }

    /// Check a received checksum against the START + data bytes
    pub fn verify(bytes: &[u8; CHECKED_LEN], checksum: u8) -> bool {
        crc8(bytes) == checksum
    }

    /// Distance in whole centimeters (truncated)
    pub const fn distance_cm(&self) -> u16 {
        self.value / 10
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        if buffer.len() < FRAME_LEN {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[..FRAME_LEN].copy_from_slice(&self.to_bytes());
        Ok(FRAME_LEN)
    }

    /// Encode this frame into a fixed array
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let [hi, lo] = self.value.to_be_bytes();
        let checked = [FRAME_START, hi, lo];
        [FRAME_START, hi, lo, crc8(&checked)]
    }

    /// Decode a frame from the start of `bytes`
    ///
    /// `bytes` must begin with [`FRAME_START`]; trailing bytes past
    /// [`FRAME_LEN`] are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        match bytes.first() {
            None => return Err(FrameError::Incomplete),
            Some(&FRAME_START) => {}
            Some(_) => return Err(FrameError::InvalidStart),
        }

        if bytes.len() < FRAME_LEN {
            return Err(FrameError::Incomplete);
        }

        let checked = [bytes[0], bytes[1], bytes[2]];
        if !Self::verify(&checked, bytes[3]) {
            return Err(FrameError::InvalidChecksum);
        }

        Ok(Self::from_checked(&checked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_encode() {
        let frame = Frame::new(100);
        let mut buffer = [0u8; 8];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(buffer[0], FRAME_START);
        assert_eq!(buffer[1], 0x00); // hi
        assert_eq!(buffer[2], 0x64); // lo
        assert_eq!(buffer[3], 0xB4); // crc8(54 00 64)
        assert_eq!(buffer[4], 0); // untouched
    }

    #[test]
    fn test_frame_decode() {
        let frame = Frame::decode(&[0x54, 0x03, 0xE8, 0x26]).unwrap();
        assert_eq!(frame.value, 1000);
        assert_eq!(frame.distance_cm(), 100);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let frame = Frame::decode(&[0x54, 0x00, 0x64, 0xB4, 0x54, 0x00]).unwrap();
        assert_eq!(frame.value, 100);
    }

    #[test]
    fn test_decode_invalid_checksum() {
        let mut encoded = Frame::new(1234).to_bytes();
        encoded[3] ^= 0xFF;
        assert_eq!(Frame::decode(&encoded), Err(FrameError::InvalidChecksum));
    }

    #[test]
    fn test_decode_invalid_start() {
        assert_eq!(
            Frame::decode(&[0x55, 0x00, 0x64, 0xB4]),
            Err(FrameError::InvalidStart)
        );
    }

    #[test]
    fn test_decode_incomplete() {
        assert_eq!(Frame::decode(&[]), Err(FrameError::Incomplete));
        assert_eq!(
            Frame::decode(&[0x54, 0x00, 0x64]),
            Err(FrameError::Incomplete)
        );
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buffer = [0u8; 3];
        assert_eq!(
            Frame::new(1).encode(&mut buffer),
            Err(FrameError::BufferTooSmall)
        );
    }

    #[test]
    fn test_distance_truncates() {
        assert_eq!(Frame::new(109).distance_cm(), 10);
        assert_eq!(Frame::new(9).distance_cm(), 0);
        assert_eq!(Frame::new(u16::MAX).distance_cm(), 6553);
    }

    #[test]
    fn test_verify_and_from_checked() {
        let checked = [FRAME_START, 0x13, 0x88];
        assert!(Frame::verify(&checked, 0x56));
        assert!(!Frame::verify(&checked, 0x57));
        assert_eq!(Frame::from_checked(&checked).value, 5000);
    }
}
