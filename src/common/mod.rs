// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod crc;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From crc.rs
pub use crc::{calculate_crc16, decode_crc, encode_crc, verify_frame_crc};

// From error.rs
pub use error::Am2320Error;

// From frame.rs
pub use frame::{RegisterRequest, RegisterWindow};

// From hal_traits.rs
pub use hal_traits::{Am2320Bus, Am2320Timer};

// From timing.rs (constants - users can access via common::timing::*)

// From types.rs
pub use types::{Humidity, Measurement, Temperature};
