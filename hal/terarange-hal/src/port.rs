//! Serial port discovery
//!
//! Boards decide which physical UART carries which protocol. Drivers only
//! ask for "the n-th port configured for protocol X" and either get a
//! ready-to-read stream or nothing.

use heapless::Vec;

use crate::uart::{ByteStream, UartConfig};

/// What a serial port has been assigned to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialProtocol {
    /// Debug console
    Console,
    /// Ground station telemetry
    Telemetry,
    /// GNSS receiver
    Gps,
    /// Serial rangefinder
    Rangefinder,
}

/// Port table errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortError {
    /// No free slot left in the table
    TableFull,
}

/// Supplies configured serial ports to drivers
///
/// `instance` counts ports assigned to the same protocol, starting at 0.
pub trait SerialPortProvider {
    /// Stream type handed out for a port
    type Port: ByteStream;

    /// Claim a port
    ///
    /// The returned stream is already running at the configured baud rate.
    /// Returns `None` if no such port exists or it was already claimed.
    fn find_serial(&mut self, protocol: SerialProtocol, instance: u8) -> Option<Self::Port>;

    /// Check whether a port could be claimed, without claiming it
    fn has_serial(&self, protocol: SerialProtocol, instance: u8) -> bool;

    /// Baud rate configured for a port
    fn find_baudrate(&self, protocol: SerialProtocol, instance: u8) -> Option<u32>;
}

/// One row of a [`PortTable`]
struct PortEntry<S> {
    protocol: SerialProtocol,
    config: UartConfig,
    /// `None` once claimed
    port: Option<S>,
}

/// Fixed-capacity port registry
///
/// Boards fill it at startup with already-initialized streams. Each port
/// can be claimed once; ownership moves to the claiming driver.
pub struct PortTable<S, const N: usize> {
    entries: Vec<PortEntry<S>, N>,
}

impl<S, const N: usize> Default for PortTable<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const N: usize> PortTable<S, N> {
    /// Create an empty table
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register a port
    pub fn add(
        &mut self,
        protocol: SerialProtocol,
        config: UartConfig,
        port: S,
    ) -> Result<(), PortError> {
        self.entries
            .push(PortEntry {
                protocol,
                config,
                port: Some(port),
            })
            .map_err(|_| PortError::TableFull)
    }

    /// Number of registered ports, claimed or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no ports are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// UART settings for a port
    pub fn config(&self, protocol: SerialProtocol, instance: u8) -> Option<UartConfig> {
        self.entry(protocol, instance).map(|e| e.config)
    }

    fn entry(&self, protocol: SerialProtocol, instance: u8) -> Option<&PortEntry<S>> {
        self.entries
            .iter()
            .filter(|e| e.protocol == protocol)
            .nth(instance as usize)
    }

    fn entry_mut(&mut self, protocol: SerialProtocol, instance: u8) -> Option<&mut PortEntry<S>> {
        self.entries
            .iter_mut()
            .filter(|e| e.protocol == protocol)
            .nth(instance as usize)
    }
}

impl<S: ByteStream, const N: usize> SerialPortProvider for PortTable<S, N> {
    type Port = S;

    fn find_serial(&mut self, protocol: SerialProtocol, instance: u8) -> Option<S> {
        self.entry_mut(protocol, instance)?.port.take()
    }

    fn has_serial(&self, protocol: SerialProtocol, instance: u8) -> bool {
        self.entry(protocol, instance)
            .is_some_and(|e| e.port.is_some())
    }

    fn find_baudrate(&self, protocol: SerialProtocol, instance: u8) -> Option<u32> {
        self.config(protocol, instance).map(|c| c.baudrate)
    }
}
