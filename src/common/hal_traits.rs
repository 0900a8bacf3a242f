// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for timer/delay operations required by the wake and
/// conversion handshakes.
pub trait Am2320Timer {
    /// Block for at least `us` microseconds.
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for blocking byte transfers to and from the sensor.
pub trait Am2320Bus {
    /// Error type surfaced by failed bus transfers.
    type Error: Debug;

    /// Writes the whole buffer to the device in a single bus transaction.
    ///
    /// Returns the number of bytes accepted. A sleeping AM2320 does not
    /// acknowledge its address, so implementations may report an error for
    /// the one-byte wake pulse even though the pulse itself succeeded; the
    /// driver treats that rejection as expected.
    fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error>;

    /// Reads exactly `buffer.len()` bytes from the device.
    ///
    /// Implementations must fill the entire buffer or return an error; a
    /// short read must never come back as `Ok`.
    fn receive(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error>;
}
