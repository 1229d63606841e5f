//! TeraRanger serial rangefinder
//!
//! The sensor streams `[0x54][hi][lo][crc8]` frames continuously at its
//! own rate, usually several per update cycle. Each cycle drains whatever
//! has arrived, averages every frame that passes its checksum and reports
//! the mean in centimeters.
//!
//! Decoding is stateless between cycles. A frame cut off at the end of
//! the buffer is dropped, and its remaining bytes are skipped as noise on
//! the next cycle.

use terarange_core::config::RangefinderConfig;
use terarange_core::health::{Health, StalenessTracker};
use terarange_core::state::{RangeStatus, RangefinderState};
use terarange_core::traits::Rangefinder;
use terarange_hal::{ByteStream, Clock, SerialPortProvider, SerialProtocol};
use terarange_protocol::{Aggregate, Frame, CHECKED_LEN, FRAME_LEN, FRAME_START};

/// Bytes that must follow a START byte for a frame to be complete
const FRAME_TAIL_LEN: usize = FRAME_LEN - 1;

/// Check whether a TeraRanger port is configured
///
/// Only looks for the port; the sensor itself is not contacted.
pub fn detect<P: SerialPortProvider>(provider: &P, instance: u8) -> bool {
    provider.has_serial(SerialProtocol::Rangefinder, instance)
}

/// What happened during the last decode cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleStats {
    /// Frames that passed the checksum
    pub frames: u32,
    /// Frames dropped for a checksum mismatch
    pub checksum_errors: u32,
    /// Non-START bytes discarded while searching for a frame
    pub skipped_bytes: u32,
    /// Scan stopped on a START byte without enough bytes behind it
    pub truncated: bool,
}

/// TeraRanger serial backend
///
/// Owns the serial stream and the sensor state. The clock is only used to
/// timestamp readings for staleness tracking.
pub struct TeraRangerSerial<S, C> {
    stream: S,
    clock: C,
    config: RangefinderConfig,
    state: RangefinderState,
    tracker: StalenessTracker,
    /// START + data bytes of the frame being checked
    linebuf: [u8; CHECKED_LEN],
    last_cycle: CycleStats,
}

impl<S: ByteStream, C: Clock> TeraRangerSerial<S, C> {
    /// Claim the configured rangefinder port and create the backend
    ///
    /// Returns `None` when the provider has no rangefinder port at
    /// `config.serial_instance`.
    pub fn new<P>(provider: &mut P, config: RangefinderConfig, clock: C) -> Option<Self>
    where
        P: SerialPortProvider<Port = S>,
    {
        let stream = provider.find_serial(SerialProtocol::Rangefinder, config.serial_instance)?;
        Some(Self::from_stream(stream, config, clock))
    }

    /// Create the backend on an already-open stream
    pub fn from_stream(stream: S, config: RangefinderConfig, clock: C) -> Self {
        Self {
            stream,
            clock,
            tracker: StalenessTracker::new(config.timeout_ms),
            config,
            state: RangefinderState::attached(),
            linebuf: [0; CHECKED_LEN],
            last_cycle: CycleStats::default(),
        }
    }

    /// Drain available bytes and average the valid frames
    ///
    /// Returns the mean distance in centimeters, or `None` if no valid
    /// frame was found. Never blocks: only bytes available at entry are
    /// read.
    pub fn decode_cycle(&mut self) -> Option<u16> {
        let mut aggregate = Aggregate::new();
        let mut stats = CycleStats::default();
        let mut remaining = self.stream.available();

        while remaining > 0 {
            self.linebuf[0] = match self.stream.read_byte() {
                Ok(byte) => byte,
                Err(_) => break,
            };
            remaining -= 1;

            if self.linebuf[0] != FRAME_START {
                stats.skipped_bytes += 1;
                continue;
            }

            if remaining < FRAME_TAIL_LEN {
                #[cfg(feature = "defmt")]
                defmt::debug!("teraranger: truncated frame, {} bytes left", remaining);
                stats.truncated = true;
                break;
            }

            let checksum = match self.read_frame_tail() {
                Ok(checksum) => checksum,
                Err(_) => break,
            };
            remaining -= FRAME_TAIL_LEN;

            if Frame::verify(&self.linebuf, checksum) {
                aggregate.push(Frame::from_checked(&self.linebuf).value);
                stats.frames += 1;
                self.linebuf = [0; CHECKED_LEN];
            } else {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "teraranger: checksum mismatch {:x} vs {:x}",
                    self.linebuf,
                    checksum
                );
                stats.checksum_errors += 1;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("teraranger: cycle {}", stats);

        self.last_cycle = stats;
        aggregate.distance_cm()
    }

    /// Read data hi/lo into the line buffer and return the checksum byte
    fn read_frame_tail(&mut self) -> Result<u8, S::Error> {
        self.linebuf[1] = self.stream.read_byte()?;
        self.linebuf[2] = self.stream.read_byte()?;
        self.stream.read_byte()
    }

    /// Statistics from the most recent decode cycle
    pub fn last_cycle(&self) -> CycleStats {
        self.last_cycle
    }

    /// Active configuration
    pub fn config(&self) -> &RangefinderConfig {
        &self.config
    }

    /// Current reading health
    pub fn health(&self) -> Health {
        self.tracker.health()
    }

    /// Stream access for the board, e.g. to refill a receive FIFO
    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Shut the backend down and return the stream
    pub fn release(self) -> S {
        self.stream
    }
}

impl<S: ByteStream, C: Clock> Rangefinder for TeraRangerSerial<S, C> {
    fn update(&mut self) {
        match self.decode_cycle() {
            Some(distance_cm) => {
                let now_ms = self.clock.now_ms();
                self.state.distance_cm = distance_cm;
                self.state.last_reading_ms = now_ms;
                self.tracker.record_reading(now_ms);
                self.state.update_status(&self.config);
            }
            None => {
                let now_ms = self.clock.now_ms();
                if self.tracker.check(now_ms) == Health::NoData {
                    if self.state.status != RangeStatus::NoData {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("teraranger: no data for {} ms", self.config.timeout_ms);
                    }
                    self.state.set_status(RangeStatus::NoData);
                }
            }
        }
    }

    fn state(&self) -> &RangefinderState {
        &self.state
    }
}
