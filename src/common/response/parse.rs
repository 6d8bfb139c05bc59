// src/common/response/parse.rs

//! Decoders for the response payloads the recorder asks for.
//!
//! Every function takes the payload as returned by the response waiter: the
//! bytes from the responding address up to (not including) `<CR><LF>`, with
//! any CRC already stripped.

use super::error::ResponseParseError;
use super::identification::{
    IdentificationInfo, FIRMWARE_VERSION_LEN, MODEL_LEN, SDI_VERSION_LEN, SERIAL_MAX_LEN,
    VENDOR_LEN,
};
use super::timing::MeasurementTiming;

use crate::common::address::Sdi12Addr;
use crate::common::types::{Sdi12Value, SENTINEL_VALUE};

use core::str::{self, FromStr};
use heapless::String;

// --- Internal Helpers ---

fn leading_address(payload: &[u8]) -> Result<Sdi12Addr, ResponseParseError> {
    let first = *payload.first().ok_or(ResponseParseError::EmptyInput)?;
    Sdi12Addr::from_byte(first).map_err(|_| ResponseParseError::InvalidAddressChar(first as char))
}

/// `bytes[start..start + len]`, clamped to what is actually there.
fn clamped(bytes: &[u8], start: usize, len: usize) -> &[u8] {
    let start = start.min(bytes.len());
    let end = start.saturating_add(len).min(bytes.len());
    &bytes[start..end]
}

fn fixed_field<const N: usize>(bytes: &[u8]) -> Result<String<N>, ResponseParseError> {
    let mut field = String::new();
    field
        .push_str(str::from_utf8(bytes)?)
        .map_err(|_| ResponseParseError::InvalidFormat)?;
    Ok(field)
}

// --- Public Parsing Functions ---

/// Decodes a measurement ack `atttn` (or `atttnn` for `aC!`).
///
/// `ttt` is the three bytes after the address; the count is whatever follows,
/// with surrounding spaces ignored.
pub fn parse_measurement_timing(payload: &[u8]) -> Result<MeasurementTiming, ResponseParseError> {
    let address = leading_address(payload)?;
    if payload.len() < 5 {
        return Err(ResponseParseError::TooShort);
    }

    let ttt = str::from_utf8(&payload[1..4])?.trim();
    let count = str::from_utf8(&payload[4..])?.trim();
    if count.is_empty() {
        return Err(ResponseParseError::TooShort);
    }

    Ok(MeasurementTiming {
        address,
        time_seconds: u16::from_str(ttt)?,
        values_count: u16::from_str(count)?,
    })
}

/// Extracts signed values from a data line `a<values>` into `out`.
///
/// Exactly `out.len()` values are attempted, in order. Slots that cannot be
/// filled because the line is short or malformed get [`SENTINEL_VALUE`].
/// Returns how many values were actually parsed. A line without any `+` or
/// `-` is [`ResponseParseError::NoData`] and leaves every slot at the sentinel.
pub fn parse_values(payload: &[u8], out: &mut [f32]) -> Result<usize, ResponseParseError> {
    let has_sign = payload.contains(&b'+') || payload.contains(&b'-');
    if !has_sign {
        out.fill(SENTINEL_VALUE);
        return Err(ResponseParseError::NoData);
    }

    let mut cursor = payload.get(1..).unwrap_or_default();
    let mut parsed = 0;
    for slot in out.iter_mut() {
        match Sdi12Value::parse_prefix(cursor) {
            Some((value, used)) => {
                *slot = value.as_f32();
                cursor = &cursor[used..];
                parsed += 1;
            }
            None => {
                *slot = SENTINEL_VALUE;
                // A token that failed once will fail again
                cursor = &[];
            }
        }
    }
    Ok(parsed)
}

/// Decodes `allccccccccmmmmmmvvvxxx...` into its fixed-width fields.
pub fn parse_identification(payload: &[u8]) -> Result<IdentificationInfo, ResponseParseError> {
    let address = leading_address(payload)?;
    let body = &payload[1..];

    let version_at = 0;
    let vendor_at = version_at + SDI_VERSION_LEN;
    let model_at = vendor_at + VENDOR_LEN;
    let firmware_at = model_at + MODEL_LEN;
    let serial_at = firmware_at + FIRMWARE_VERSION_LEN;

    Ok(IdentificationInfo {
        address,
        sdi_version: fixed_field(clamped(body, version_at, SDI_VERSION_LEN))?,
        vendor: fixed_field(clamped(body, vendor_at, VENDOR_LEN))?,
        model: fixed_field(clamped(body, model_at, MODEL_LEN))?,
        version: fixed_field(clamped(body, firmware_at, FIRMWARE_VERSION_LEN))?,
        serial: fixed_field(clamped(body, serial_at, SERIAL_MAX_LEN))?,
    })
}

/// Decodes the `a` answer to `?!`.
pub fn parse_address_query(payload: &[u8]) -> Result<Sdi12Addr, ResponseParseError> {
    leading_address(payload)
}
