//! UART serial communication abstractions
//!
//! The rangefinder only ever listens, so the receive side is all that is
//! modelled here. Reads never block: callers ask how many bytes are ready
//! and then pull at most that many.

use embedded_io::{Read, ReadReady};
use heapless::Deque;

/// Non-blocking serial byte source
///
/// Implemented by board UART drivers (usually through [`RxBuffer`]) and by
/// test fakes.
pub trait ByteStream {
    /// Error type for read operations
    type Error;

    /// Number of bytes that can be read right now without blocking
    fn available(&self) -> usize;

    /// Read a single byte
    ///
    /// Only guaranteed to succeed while [`ByteStream::available`] is non-zero.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

impl<T: ByteStream + ?Sized> ByteStream for &mut T {
    type Error = T::Error;

    fn available(&self) -> usize {
        (**self).available()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (**self).read_byte()
    }
}

/// Errors reported by [`RxBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StreamError {
    /// Read attempted with nothing buffered
    Empty,
}

/// Receive FIFO in front of an `embedded-io` UART
///
/// HAL UART drivers expose `Read + ReadReady` but cannot report how many
/// bytes are pending. `RxBuffer` drains whatever is ready into a fixed
/// FIFO on [`RxBuffer::fill`] so the decoder can see an exact count.
pub struct RxBuffer<R, const N: usize> {
    rx: R,
    fifo: Deque<u8, N>,
}

impl<R, const N: usize> RxBuffer<R, N> {
    /// Wrap a UART receiver
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            fifo: Deque::new(),
        }
    }

    /// Free space left in the FIFO
    pub fn free(&self) -> usize {
        N - self.fifo.len()
    }

    /// Drop all buffered bytes
    pub fn clear(&mut self) {
        self.fifo.clear();
    }

    /// Give back the wrapped receiver, discarding buffered bytes
    pub fn into_inner(self) -> R {
        self.rx
    }
}

impl<R: Read + ReadReady, const N: usize> RxBuffer<R, N> {
    /// Move every byte the UART has ready into the FIFO
    ///
    /// Stops early when the FIFO is full; the rest stays in the UART.
    /// Returns the number of bytes moved.
    pub fn fill(&mut self) -> Result<usize, R::Error> {
        let mut chunk = [0u8; 16];
        let mut moved = 0;

        while !self.fifo.is_full() && self.rx.read_ready()? {
            let room = self.free().min(chunk.len());
            let n = self.rx.read(&mut chunk[..room])?;
            if n == 0 {
                break;
            }
            for &byte in &chunk[..n] {
                // Cannot fail: n <= room
                let _ = self.fifo.push_back(byte);
            }
            moved += n;
        }

        Ok(moved)
    }
}

impl<R, const N: usize> ByteStream for RxBuffer<R, N> {
    type Error = StreamError;

    fn available(&self) -> usize {
        self.fifo.len()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.fifo.pop_front().ok_or(StreamError::Empty)
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 8N1 at the given baud rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::with_baudrate(115200)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// UART fake that hands out at most `burst` bytes per read
    struct FakeUart {
        data: &'static [u8],
        pos: usize,
        burst: usize,
    }

    impl embedded_io::ErrorType for FakeUart {
        type Error = Infallible;
    }

    impl Read for FakeUart {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let n = buf.len().min(self.burst).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl ReadReady for FakeUart {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(self.pos < self.data.len())
        }
    }

    #[test]
    fn test_default_config_is_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 115200);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    fn test_fill_drains_ready_bytes() {
        let uart = FakeUart {
            data: &[0x54, 0x00, 0x64, 0x12, 0xFF],
            pos: 0,
            burst: 2,
        };
        let mut rx: RxBuffer<_, 16> = RxBuffer::new(uart);

        assert_eq!(rx.available(), 0);
        assert_eq!(rx.fill().unwrap(), 5);
        assert_eq!(rx.available(), 5);
        assert_eq!(rx.read_byte(), Ok(0x54));
        assert_eq!(rx.read_byte(), Ok(0x00));
        assert_eq!(rx.available(), 3);
    }

    #[test]
    fn test_fill_stops_when_full() {
        let uart = FakeUart {
            data: &[1, 2, 3, 4, 5, 6],
            pos: 0,
            burst: 16,
        };
        let mut rx: RxBuffer<_, 4> = RxBuffer::new(uart);

        assert_eq!(rx.fill().unwrap(), 4);
        assert_eq!(rx.free(), 0);

        // Drain two, the rest arrives on the next fill
        rx.read_byte().unwrap();
        rx.read_byte().unwrap();
        assert_eq!(rx.fill().unwrap(), 2);
        assert_eq!(rx.read_byte(), Ok(3));

        let uart = rx.into_inner();
        assert_eq!(uart.pos, 6);
    }

    #[test]
    fn test_read_empty_buffer() {
        let uart = FakeUart {
            data: &[],
            pos: 0,
            burst: 1,
        };
        let mut rx: RxBuffer<_, 4> = RxBuffer::new(uart);
        assert_eq!(rx.fill().unwrap(), 0);
        assert_eq!(rx.read_byte(), Err(StreamError::Empty));
    }
}
