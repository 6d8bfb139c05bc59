// src/recorder/mod.rs

pub mod config;
pub mod sensor;
pub mod sync_recorder;

pub use config::PollConfig;
pub use sensor::Sdi12Sensor;
pub use sync_recorder::SyncRecorder;
