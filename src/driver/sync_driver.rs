// src/driver/sync_driver.rs

use crate::common::{
    crc,
    error::Am2320Error,
    frame::{self, RegisterRequest, RegisterWindow},
    hal_traits::{Am2320Bus, Am2320Timer},
    timing,
    types::{Humidity, Measurement, Temperature},
};
use core::fmt::Debug;
use core::time::Duration;

/// Consecutive CRC failures tolerated before an exchange is abandoned.
const MAX_CRC_FAILURES: u8 = 5;

/// Smallest read count that still discards the stale first conversion.
pub const READ_COUNT_MIN: u8 = 2;
/// Largest read count worth the extra latency.
pub const READ_COUNT_MAX: u8 = 4;
/// Default number of reads per sample.
pub const READ_COUNT_DEFAULT: u8 = 2;

/// Controls how [`SyncDriver::sample`] spreads its register reads.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SampleConfig {
    /// Reads per sample; only the last one is reported.
    pub read_count: u8,
    /// Settle time between consecutive reads.
    pub read_delay: Duration,
}

impl SampleConfig {
    /// Checks the configuration against the recommended operating range.
    pub fn is_valid(&self) -> bool {
        (READ_COUNT_MIN..=READ_COUNT_MAX).contains(&self.read_count)
            && (timing::SAMPLE_DELAY_MIN..=timing::SAMPLE_DELAY_MAX).contains(&self.read_delay)
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig {
            read_count: READ_COUNT_DEFAULT,
            read_delay: timing::SAMPLE_DELAY_DEFAULT,
        }
    }
}

/// Represents one AM2320 sensor behind a bus, for SYNCHRONOUS operations.
#[derive(Debug)]
pub struct SyncDriver<IF>
where
    IF: Am2320Bus + Am2320Timer,
    IF::Error: Debug,
{
    interface: IF,
    config: SampleConfig,
    crc_failures: u8,
}

impl<IF> SyncDriver<IF>
where
    IF: Am2320Bus + Am2320Timer,
    IF::Error: Debug,
{
    /// Creates a driver with the default sampling configuration.
    pub fn new(interface: IF) -> Self {
        SyncDriver::with_config(interface, SampleConfig::default())
    }

    pub fn with_config(interface: IF, config: SampleConfig) -> Self {
        SyncDriver {
            interface,
            config,
            crc_failures: 0,
        }
    }

    pub fn config(&self) -> SampleConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SampleConfig) {
        self.config = config;
    }

    /// CRC failures seen since the last verified response.
    pub fn consecutive_failures(&self) -> u8 {
        self.crc_failures
    }

    /// Consumes the driver and hands the interface back.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Public Blocking Read Operations ---

    /// Samples the humidity registers and decodes the final read.
    pub fn read_humidity(&mut self) -> Result<Humidity, Am2320Error<IF::Error>> {
        let mut buffer = [0u8; frame::MAX_RESPONSE_LEN];
        let payload = self.sample(RegisterWindow::Humidity, &mut buffer)?;
        Ok(Humidity::from_payload(payload, 0))
    }

    /// Samples the temperature registers and decodes the final read.
    pub fn read_temperature(&mut self) -> Result<Temperature, Am2320Error<IF::Error>> {
        let mut buffer = [0u8; frame::MAX_RESPONSE_LEN];
        let payload = self.sample(RegisterWindow::Temperature, &mut buffer)?;
        Ok(Temperature::from_payload(payload, 0))
    }

    /// Samples humidity and temperature together, one exchange per read.
    pub fn read_all(&mut self) -> Result<Measurement, Am2320Error<IF::Error>> {
        let mut buffer = [0u8; frame::MAX_RESPONSE_LEN];
        let payload = self.sample(RegisterWindow::All, &mut buffer)?;
        Ok(Measurement::from_payload(payload))
    }

    /// Runs a full sampling cycle over `window` and returns the payload of
    /// the final read.
    ///
    /// The sensor's first conversion after a long sleep reports stale
    /// register values, so the configured read count includes warm-up
    /// reads whose payloads are discarded. Read counts below 2 collapse to
    /// a single exchange. The settle delay runs between reads, never after
    /// the final one.
    pub fn sample<'buf>(
        &mut self,
        window: RegisterWindow,
        buffer: &'buf mut [u8],
    ) -> Result<&'buf [u8], Am2320Error<IF::Error>> {
        let request = window.request();
        let settle_ms = self.config.read_delay.as_millis() as u32;

        for pass in 1..self.config.read_count {
            let _ = self.read_registers(request.start, request.count, &mut *buffer)?;
            log::debug!("warm-up pass {} discarded, settling for {} ms", pass, settle_ms);
            self.interface.delay_ms(settle_ms);
        }
        self.read_registers(request.start, request.count, buffer)
    }

    /// Reads `count` registers starting at `start` and returns the
    /// verified register payload.
    ///
    /// Performs the wake handshake, sends the read request, fetches the
    /// response frame into `buffer`, and checks the CRC trailer. A frame
    /// that fails verification is retried from the wake pulse onwards;
    /// after more than five consecutive bad frames, counted across calls,
    /// the driver gives up.
    ///
    /// # Errors
    ///
    /// * [`Am2320Error::BufferOverflow`] if `buffer` cannot hold the frame.
    /// * [`Am2320Error::Io`] if the bus rejects the request or the read.
    /// * [`Am2320Error::RetriesExhausted`] once the failure bound is hit.
    pub fn read_registers<'buf>(
        &mut self,
        start: u8,
        count: u8,
        buffer: &'buf mut [u8],
    ) -> Result<&'buf [u8], Am2320Error<IF::Error>> {
        let request = RegisterRequest::new(start, count);
        let response_len = request.response_len();
        if buffer.len() < response_len {
            return Err(Am2320Error::BufferOverflow {
                needed: response_len,
                got: buffer.len(),
            });
        }

        loop {
            self.wake();
            self.send_request(&request)?;

            self.interface
                .receive(&mut buffer[..response_len])
                .map_err(Am2320Error::Io)?;
            log::trace!("response frame {:02x?}", &buffer[..response_len]);

            match crc::verify_frame_crc(&buffer[..response_len]) {
                Ok(()) => {
                    self.crc_failures = 0;
                    return Ok(&buffer[frame::PAYLOAD_OFFSET..response_len - frame::CRC_LEN]);
                }
                Err(Am2320Error::CrcMismatch { expected, calculated }) => {
                    self.crc_failures = self.crc_failures.saturating_add(1);
                    if self.crc_failures > MAX_CRC_FAILURES {
                        log::error!(
                            "giving up after {} consecutive CRC failures",
                            self.crc_failures
                        );
                        return Err(Am2320Error::RetriesExhausted {
                            failures: self.crc_failures,
                        });
                    }
                    log::warn!(
                        "CRC mismatch (expected {:#06x}, calculated {:#06x}), failure {} of {}",
                        expected,
                        calculated,
                        self.crc_failures,
                        MAX_CRC_FAILURES
                    );
                }
                Err(other) => return Err(other),
            }
        }
    }

    // --- Protocol Helpers (Private) ---

    /// Wake handshake: a one-byte pulse followed by the settle delay.
    ///
    /// A sleeping sensor does not acknowledge its own address, so the bus
    /// usually reports the pulse as failed even though it did its job.
    /// The pulse outcome is therefore ignored.
    fn wake(&mut self) {
        if let Err(e) = self.interface.send(&[frame::WAKE_PULSE]) {
            log::trace!("wake pulse rejected (sensor was asleep): {:?}", e);
        }
        self.interface
            .delay_us(timing::WAKE_SETTLE.as_micros() as u32);
    }

    fn send_request(&mut self, request: &RegisterRequest) -> Result<(), Am2320Error<IF::Error>> {
        let request_bytes = request.encode();
        log::trace!("sending request {:02x?}", request_bytes);
        self.interface
            .send(&request_bytes)
            .map_err(Am2320Error::Io)?;
        self.interface
            .delay_us(timing::PROCESSING_DELAY.as_micros() as u32);
        Ok(())
    }
}
