// src/common/types.rs

/// Reads the big-endian register pair starting at `offset` in a payload.
///
/// # Panics
///
/// Panics if `payload` does not hold two bytes at `offset`.
pub fn register_pair(payload: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([payload[offset], payload[offset + 1]])
}

/// Relative humidity in tenths of a percent, as reported by the sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Humidity(u16);

impl Humidity {
    pub const fn from_raw(raw: u16) -> Self {
        Humidity(raw)
    }

    /// Decodes the register pair starting at `offset` in a payload.
    ///
    /// # Panics
    ///
    /// Panics if `payload` does not hold two bytes at `offset`.
    pub fn from_payload(payload: &[u8], offset: usize) -> Self {
        Humidity(register_pair(payload, offset))
    }

    /// The raw reading, in tenths of a percent.
    pub const fn tenths(&self) -> u16 {
        self.0
    }

    /// The reading in percent relative humidity.
    pub fn percent(&self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

/// Temperature in tenths of a degree Celsius.
///
/// The sensor encodes negative temperatures as sign bit plus magnitude
/// rather than two's complement; the raw register value is normalized to a
/// signed count of tenths on construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Temperature(i16);

impl Temperature {
    const SIGN_BIT: u16 = 0x8000;

    pub const fn from_raw(raw: u16) -> Self {
        if raw & Self::SIGN_BIT != 0 {
            Temperature(-((raw & !Self::SIGN_BIT) as i16))
        } else {
            Temperature(raw as i16)
        }
    }

    /// Decodes the register pair starting at `offset` in a payload.
    ///
    /// # Panics
    ///
    /// Panics if `payload` does not hold two bytes at `offset`.
    pub fn from_payload(payload: &[u8], offset: usize) -> Self {
        Temperature::from_raw(register_pair(payload, offset))
    }

    /// The normalized reading, in tenths of a degree Celsius.
    pub const fn tenths(&self) -> i16 {
        self.0
    }

    /// The reading in degrees Celsius.
    pub fn celsius(&self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

/// One humidity/temperature pair from a combined register read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub humidity: Humidity,
    pub temperature: Temperature,
}

impl Measurement {
    /// Decodes a 4-byte payload laid out as the combined register window:
    /// humidity pair first, temperature pair second.
    ///
    /// # Panics
    ///
    /// Panics if `payload` is shorter than 4 bytes.
    pub fn from_payload(payload: &[u8]) -> Self {
        Measurement {
            humidity: Humidity::from_payload(payload, 0),
            temperature: Temperature::from_payload(payload, 2),
        }
    }
}
