// src/adapters/mod.rs

//! Concrete bus interfaces. Each adapter implements both [`Am2320Bus`]
//! and [`Am2320Timer`] so a single value can drive
//! [`SyncDriver`](crate::driver::SyncDriver).
//!
//! [`Am2320Bus`]: crate::common::hal_traits::Am2320Bus
//! [`Am2320Timer`]: crate::common::hal_traits::Am2320Timer

#[cfg(feature = "embedded-hal")]
pub mod hal;
#[cfg(feature = "linux")]
pub mod linux;

#[cfg(feature = "embedded-hal")]
pub use hal::HalI2c;
#[cfg(feature = "linux")]
pub use linux::LinuxI2c;
