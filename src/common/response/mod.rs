// src/common/response/mod.rs

mod error;
mod identification;
mod timing;
pub mod parse; // Make parse functions public

// Re-export items for external use
pub use error::ResponseParseError;
pub use identification::IdentificationInfo;
pub use timing::MeasurementTiming;
pub use parse::{parse_address_query, parse_identification, parse_measurement_timing, parse_values};
