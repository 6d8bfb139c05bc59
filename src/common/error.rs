// src/common/error.rs

use super::command::CommandFormatError;
use super::response::ResponseParseError;

/// Errors reported by recorder operations.
///
/// None of these are fatal: every operation can simply be retried by the caller.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Sdi12Error<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Io error
{
    /// Underlying I/O error from the HAL implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// No `<CR><LF>` terminator arrived within the poll budget.
    #[error("Operation timed out")]
    Timeout,

    /// A response arrived but carried no signed measurement values.
    #[error("Response carried no measurement data")]
    NoData,

    /// The sensor never echoed its new address after a change address command.
    #[error("Address change was not acknowledged")]
    AddressMismatch,

    /// Provided address character is not a valid SDI-12 address.
    #[error("Invalid SDI-12 address character: '{0}'")]
    InvalidAddress(char),

    /// Received response format is invalid or unexpected.
    #[error("Invalid response format")]
    InvalidFormat,

    /// Buffer provided was too small.
    #[error("Buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },

    /// Received CRC does not match calculated CRC.
    #[error("CRC mismatch: expected {expected:#06x}, calculated {calculated:#06x}")]
    CrcMismatch { expected: u16, calculated: u16 },

    /// The command could not be formatted into its fixed-size buffer.
    #[error("Command formatting failed: {0:?}")]
    CommandFormatFailed(CommandFormatError),
}

impl<E: core::fmt::Debug> From<ResponseParseError> for Sdi12Error<E> {
    fn from(e: ResponseParseError) -> Self {
        match e {
            ResponseParseError::NoData => Sdi12Error::NoData,
            ResponseParseError::InvalidAddressChar(c) => Sdi12Error::InvalidAddress(c),
            _ => Sdi12Error::InvalidFormat,
        }
    }
}

impl<E: core::fmt::Debug> From<CommandFormatError> for Sdi12Error<E> {
    fn from(e: CommandFormatError) -> Self {
        Sdi12Error::CommandFormatFailed(e)
    }
}
