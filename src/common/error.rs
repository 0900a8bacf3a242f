// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Am2320Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying I/O error from the bus implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// Buffer provided was too small for the expected response frame.
    #[error("Buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },

    /// Response frame ended before the CRC trailer.
    #[error("Truncated frame: needed {needed} bytes, got {got}")]
    TruncatedFrame { needed: usize, got: usize },

    /// Response trailer CRC disagrees with the locally computed one.
    #[error("CRC mismatch: expected {expected:#06x}, calculated {calculated:#06x}")]
    CrcMismatch { expected: u16, calculated: u16 },

    /// Too many consecutive CRC failures; the exchange was abandoned.
    #[error("Aborting after {failures} consecutive CRC failures")]
    RetriesExhausted { failures: u8 },
}

// Allow mapping from the underlying bus error
impl<E: core::fmt::Debug> From<E> for Am2320Error<E> {
    fn from(e: E) -> Self {
        Am2320Error::Io(e)
    }
}
