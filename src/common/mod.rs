// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod crc;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod response;
pub mod rx_buffer;
pub mod timing;
pub mod types;
pub mod zip;

#[cfg(feature = "impl-generic-hal")]
pub mod hal_adapter;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::Sdi12Addr;

// From command.rs
pub use command::{Command, CommandBuffer, CommandFormatError};

// From crc.rs
pub use self::crc::{calculate_crc16, decode_crc_ascii, encode_crc_ascii, verify_response_crc_ascii};

// From error.rs
pub use error::Sdi12Error;

// From frame.rs
pub use frame::LineState;

// From hal_traits.rs
pub use hal_traits::{Sdi12Serial, Sdi12Timer};

// From response/mod.rs (and its sub-modules via its own `pub use`)
pub use response::{IdentificationInfo, MeasurementTiming, ResponseParseError};

// From types.rs
pub use types::{Sdi12Value, SENTINEL_VALUE};

// From rx_buffer.rs
pub use rx_buffer::{RxBuffer, RX_BUFFER_CAPACITY};

// From zip.rs
pub use zip::ZipReadings;

#[cfg(feature = "impl-generic-hal")]
pub use hal_adapter::{GenericHalError, GenericHalInterface};
