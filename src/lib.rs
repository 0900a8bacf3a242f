// src/lib.rs

//! Driver for the Aosong AM2320 temperature and humidity sensor.
//!
//! The sensor speaks a half-duplex register protocol over I²C. It drops
//! into low-power sleep between reads to keep the die from self-heating,
//! so every exchange is a wake pulse, a 3-byte read request, a mandatory
//! processing pause, and then a response frame carrying a CRC-16/MODBUS
//! trailer:
//!
//! ```text
//! request:  [0x03, start_register, register_count]
//! response: [0x03, register_count, payload bytes..., crc_lo, crc_hi]
//! ```
//!
//! Frames failing CRC verification are retried in place, with a hard
//! ceiling on consecutive failures. Decoded values come back as fixed-point
//! tenths: humidity unsigned, temperature carrying its sign in bit 15 of
//! the raw register rather than two's-complement.
//!
//! The protocol core is `no_std`. The `linux` feature adds a transport over
//! the kernel's `i2c-dev` interface; the `embedded-hal` feature adds one
//! for any embedded-hal 1.0 bus and delay pair.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::error::Am2320Error;
pub use common::frame::{RegisterRequest, RegisterWindow};
pub use common::hal_traits::{Am2320Bus, Am2320Timer};
pub use common::types::{Humidity, Measurement, Temperature};
pub use driver::{SampleConfig, SyncDriver};
