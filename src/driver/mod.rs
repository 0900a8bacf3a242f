// src/driver/mod.rs

pub mod sync_driver;

pub use sync_driver::{
    SampleConfig, SyncDriver, READ_COUNT_DEFAULT, READ_COUNT_MAX, READ_COUNT_MIN,
};
