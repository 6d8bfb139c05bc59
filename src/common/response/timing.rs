// src/common/response/timing.rs

use crate::common::address::Sdi12Addr;

/// Timing and count information returned by Measurement/Concurrent commands. (Sec 4.4.5 etc.)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MeasurementTiming {
    /// The address of the responding sensor.
    pub address: Sdi12Addr,
    /// Time estimate in seconds until data is ready (ttt). 0-999.
    pub time_seconds: u16,
    /// Number of measurement values that will be returned (n, nn, or nnn). 0-999.
    pub values_count: u16,
}

impl MeasurementTiming {
    /// Time to wait before data can be requested, in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        u32::from(self.time_seconds) * crate::common::timing::MEASUREMENT_DELAY_UNIT_MS
    }
}
