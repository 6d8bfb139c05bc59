// src/common/response/identification.rs

use crate::common::address::Sdi12Addr;
use heapless::String;

pub const SDI_VERSION_LEN: usize = 2;
pub const VENDOR_LEN: usize = 8;
pub const MODEL_LEN: usize = 6;
pub const FIRMWARE_VERSION_LEN: usize = 3;
/// Upper bound of the optional trailing field.
pub const SERIAL_MAX_LEN: usize = 13;

/// Parsed `aI!` response: `allccccccccmmmmmmvvvxxxxxxxxxxxxx`.
///
/// Every field holds exactly the bytes found at its fixed position. A response
/// that stops early leaves the remaining fields short or empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentificationInfo {
    pub address: Sdi12Addr,
    /// `ll`, e.g. "14" for SDI-12 v1.4.
    pub sdi_version: String<SDI_VERSION_LEN>,
    pub vendor: String<VENDOR_LEN>,
    pub model: String<MODEL_LEN>,
    /// Sensor firmware version.
    pub version: String<FIRMWARE_VERSION_LEN>,
    /// Serial number or other vendor specific information.
    pub serial: String<SERIAL_MAX_LEN>,
}

impl IdentificationInfo {
    /// SDI-12 version as a number (`14` for "14"), if the field is numeric.
    pub fn sdi_version_number(&self) -> Option<u8> {
        self.sdi_version.parse().ok()
    }
}
