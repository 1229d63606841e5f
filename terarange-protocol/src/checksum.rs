//! Frame checksum
//!
//! CRC-8 with polynomial 0x07, initial value 0x00, no reflection and no
//! final XOR (catalogued as CRC-8/SMBUS). This is the table the sensor
//! firmware uses.

use crc::{Crc, CRC_8_SMBUS};

const CRC8: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);

/// CRC-8 of `data`
pub fn crc8(data: &[u8]) -> u8 {
    CRC8.checksum(data)
}
