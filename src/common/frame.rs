// src/common/frame.rs

/// Function code for reading a span of registers.
pub const FUNCTION_READ_REGISTERS: u8 = 0x03;

/// Byte written on its own to bring the sensor out of self-sleep.
pub const WAKE_PULSE: u8 = 0xFF;

/// Fixed 7-bit bus address of the AM2320 family.
pub const DEVICE_ADDRESS: u8 = 0x5C;

/// Bytes a response carries beyond the register payload: the echoed
/// function code, the payload length byte, and the 2-byte CRC trailer.
pub const RESPONSE_OVERHEAD: usize = 4;

/// Offset of the first payload byte within a response frame.
pub const PAYLOAD_OFFSET: usize = 2;

/// Length of the CRC trailer at the end of every response.
pub const CRC_LEN: usize = 2;

/// Register map of the AM2320 family.
pub mod registers {
    /// High byte of the humidity reading (tenths of %RH).
    pub const HUMIDITY_HIGH: u8 = 0x00;
    /// Low byte of the humidity reading.
    pub const HUMIDITY_LOW: u8 = 0x01;
    /// High byte of the temperature reading (sign bit + tenths of degC).
    pub const TEMPERATURE_HIGH: u8 = 0x02;
    /// Low byte of the temperature reading.
    pub const TEMPERATURE_LOW: u8 = 0x03;
    /// High byte of the model number.
    pub const MODEL_HIGH: u8 = 0x08;
    /// Low byte of the model number.
    pub const MODEL_LOW: u8 = 0x09;
    /// Firmware version.
    pub const VERSION: u8 = 0x0A;
    /// First byte of the 32-bit device ID.
    pub const DEVICE_ID: u8 = 0x0B;
    /// Status register.
    pub const STATUS: u8 = 0x0F;
}

/// A read request for a contiguous span of registers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RegisterRequest {
    /// Address of the first register to read.
    pub start: u8,
    /// Number of registers to read.
    pub count: u8,
}

impl RegisterRequest {
    pub const fn new(start: u8, count: u8) -> Self {
        RegisterRequest { start, count }
    }

    /// Encodes the request into the 3-byte wire form
    /// `{function, start, count}`.
    pub const fn encode(&self) -> [u8; 3] {
        [FUNCTION_READ_REGISTERS, self.start, self.count]
    }

    /// Total length of the response frame this request elicits,
    /// CRC trailer included.
    pub const fn response_len(&self) -> usize {
        self.count as usize + RESPONSE_OVERHEAD
    }
}

/// The register spans the driver knows how to decode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RegisterWindow {
    /// Humidity registers only (2 bytes).
    Humidity,
    /// Temperature registers only (2 bytes).
    Temperature,
    /// Humidity and temperature in one exchange (4 bytes).
    All,
}

impl RegisterWindow {
    /// The wire request covering this window.
    pub const fn request(self) -> RegisterRequest {
        match self {
            RegisterWindow::Humidity => RegisterRequest::new(registers::HUMIDITY_HIGH, 2),
            RegisterWindow::Temperature => RegisterRequest::new(registers::TEMPERATURE_HIGH, 2),
            RegisterWindow::All => RegisterRequest::new(registers::HUMIDITY_HIGH, 4),
        }
    }
}

/// Largest response frame any built-in window produces.
pub const MAX_RESPONSE_LEN: usize = RegisterWindow::All.request().response_len();

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_encoding() {
        let request = RegisterRequest::new(0x00, 4);
        assert_eq!(request.encode(), [0x03, 0x00, 0x04]);

        let request = RegisterRequest::new(0x02, 2);
        assert_eq!(request.encode(), [0x03, 0x02, 0x02]);
    }

    #[test]
    fn test_response_len_tracks_count() {
        assert_eq!(RegisterRequest::new(0x00, 2).response_len(), 6);
        assert_eq!(RegisterRequest::new(0x00, 4).response_len(), 8);
        assert_eq!(RegisterRequest::new(0x08, 1).response_len(), 5);
    }

    #[test]
    fn test_window_requests() {
        assert_eq!(RegisterWindow::Humidity.request(), RegisterRequest::new(0x00, 2));
        assert_eq!(RegisterWindow::Temperature.request(), RegisterRequest::new(0x02, 2));
        assert_eq!(RegisterWindow::All.request(), RegisterRequest::new(0x00, 4));
    }

    #[test]
    fn test_max_response_len_covers_all_window() {
        assert_eq!(MAX_RESPONSE_LEN, 8);
    }
}
