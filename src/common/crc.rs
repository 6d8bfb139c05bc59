// src/common/crc.rs

use super::error::Sdi12Error;
use crc::{Algorithm, Crc};

/// Custom CRC algorithm matching SDI-12 specification (CRC-16/ARC).
/// Polynomial: 0x8005 (normal representation of 0xA001 reversed)
/// Initial Value: 0x0000
/// Input Reflected: true
/// Output Reflected: true
/// Final XOR: 0x0000
/// Check Value: 0xBB3D (for "123456789")
pub const SDI12_CRC: Algorithm<u16> = Algorithm {
    poly: 0x8005,
    init: 0x0000,
    refin: true,
    refout: true,
    xorout: 0x0000,
    check: 0xBB3D,
    width: 16,
    residue: 0x0000,
};

const CRC_COMPUTER: Crc<u16> = Crc::<u16>::new(&SDI12_CRC);

/// Length of the ASCII-encoded CRC appended to `aMC!` data lines.
pub const ASCII_CRC_LEN: usize = 3;

/// Calculates the SDI-12 CRC-16 over `data`.
///
/// The calculation starts at the address byte and stops before the CRC
/// characters (and the trailing `<CR><LF>`).
#[inline]
pub fn calculate_crc16(data: &[u8]) -> u16 {
    CRC_COMPUTER.checksum(data)
}

/// Encodes a 16-bit CRC value into three ASCII characters (SDI-12 v1.4, 4.4.12.2).
pub fn encode_crc_ascii(crc_value: u16) -> [u8; ASCII_CRC_LEN] {
    let char1 = 0x40 | ((crc_value >> 12) & 0x3F) as u8;
    let char2 = 0x40 | ((crc_value >> 6) & 0x3F) as u8;
    let char3 = 0x40 | (crc_value & 0x3F) as u8;
    [char1, char2, char3]
}

/// Decodes three SDI-12 ASCII CRC characters back into a 16-bit value.
pub fn decode_crc_ascii(crc_chars: &[u8; ASCII_CRC_LEN]) -> u16 {
    let byte1 = u16::from(crc_chars[0] & 0x3F);
    let byte2 = u16::from(crc_chars[1] & 0x3F);
    let byte3 = u16::from(crc_chars[2] & 0x3F);
    (byte1 << 12) | (byte2 << 6) | byte3
}

/// Verifies a response line that ends with an ASCII CRC.
///
/// `response_with_crc` runs from the address byte through the 3 CRC bytes and
/// must *not* include `<CR><LF>`. On success returns the line without the CRC.
pub fn verify_response_crc_ascii<E>(response_with_crc: &[u8]) -> Result<&[u8], Sdi12Error<E>>
where
    E: core::fmt::Debug,
{
    let data_len = response_with_crc
        .len()
        .checked_sub(ASCII_CRC_LEN)
        .ok_or(Sdi12Error::InvalidFormat)?;
    let (data_part, crc_part) = response_with_crc.split_at(data_len);
    let received_crc_bytes: &[u8; ASCII_CRC_LEN] =
        crc_part.try_into().map_err(|_| Sdi12Error::InvalidFormat)?;

    let calculated_crc = calculate_crc16(data_part);
    let received_crc = decode_crc_ascii(received_crc_bytes);

    if calculated_crc == received_crc {
        Ok(data_part)
    } else {
        Err(Sdi12Error::CrcMismatch { expected: received_crc, calculated: calculated_crc })
    }
}
