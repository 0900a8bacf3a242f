// src/adapters/hal.rs

use crate::common::frame::DEVICE_ADDRESS;
use crate::common::hal_traits::{Am2320Bus, Am2320Timer};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// An AM2320 reached through `embedded-hal` 1.0 traits.
///
/// Bundles an I2C peripheral with a delay provider so the pair satisfies
/// the driver's interface bound.
#[derive(Debug)]
pub struct HalI2c<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> HalI2c<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Wraps the peripherals, targeting the sensor's fixed address.
    pub fn new(i2c: I2C, delay: D) -> Self {
        HalI2c::with_address(i2c, delay, DEVICE_ADDRESS)
    }

    /// Wraps the peripherals, targeting a non-standard address.
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        HalI2c { i2c, delay, address }
    }

    /// Consumes the adapter and hands the peripherals back.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> Am2320Bus for HalI2c<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.i2c.write(self.address, bytes)?;
        Ok(bytes.len())
    }

    fn receive(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(self.address, buffer)
    }
}

impl<I2C, D> Am2320Timer for HalI2c<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
