// src/adapters/linux.rs

use crate::common::frame;
use crate::common::hal_traits::{Am2320Bus, Am2320Timer};
use i2cdev::core::I2CDevice;
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Bus the sensor usually hangs off on Raspberry Pi style boards.
pub const DEFAULT_BUS_PATH: &str = "/dev/i2c-1";

/// An AM2320 reached through a Linux `i2c-dev` character device.
///
/// Wraps the opened device node with the slave address already bound, so
/// sends and receives are plain `write(2)`/`read(2)` calls. The node is
/// closed when the adapter is dropped.
pub struct LinuxI2c {
    dev: LinuxI2CDevice,
}

impl LinuxI2c {
    /// Opens [`DEFAULT_BUS_PATH`] with the sensor's fixed address.
    pub fn open_default() -> Result<Self, LinuxI2CError> {
        LinuxI2c::open(DEFAULT_BUS_PATH, u16::from(frame::DEVICE_ADDRESS))
    }

    /// Opens the given bus device and binds `address` as the slave.
    pub fn open<P: AsRef<Path>>(path: P, address: u16) -> Result<Self, LinuxI2CError> {
        log::debug!(
            "opening bus {:?} with device address {:#04x}",
            path.as_ref(),
            address
        );
        let dev = LinuxI2CDevice::new(path, address)?;
        Ok(LinuxI2c { dev })
    }
}

impl Am2320Bus for LinuxI2c {
    type Error = LinuxI2CError;

    fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.dev.write(bytes)?;
        Ok(bytes.len())
    }

    fn receive(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.dev.read(buffer)
    }
}

impl Am2320Timer for LinuxI2c {
    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
