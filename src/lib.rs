// src/lib.rs

#![cfg_attr(not(test), no_std)] // Tests run on the host with std

// Must stay first so the logging macros are visible in every module
#[macro_use]
mod fmt;

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod common;
pub mod recorder;

// Re-export key types for convenience
pub use common::{RxBuffer, Sdi12Addr, Sdi12Error};
pub use recorder::{PollConfig, Sdi12Sensor, SyncRecorder};
