// src/common/response/error.rs

use core::fmt;

/// Error type specific to response parsing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResponseParseError {
    /// Input buffer was empty.
    EmptyInput,
    /// Response string is too short for the expected format.
    TooShort,
    /// Data response contained no signed value.
    NoData,
    /// Invalid address character at the start.
    InvalidAddressChar(char),
    /// Failed to parse numeric parts (e.g., ttt, n).
    NumericError,
    /// Could not decode response content as UTF-8.
    InvalidUtf8,
    /// Generic "invalid format" for cases not covered above.
    InvalidFormat,
}

// --- Error Conversions ---

impl From<core::str::Utf8Error> for ResponseParseError {
    fn from(_: core::str::Utf8Error) -> Self {
        ResponseParseError::InvalidUtf8
    }
}

impl From<core::num::ParseIntError> for ResponseParseError {
    fn from(_: core::num::ParseIntError) -> Self {
        ResponseParseError::NumericError
    }
}

impl fmt::Display for ResponseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseParseError::InvalidAddressChar(c) => write!(f, "invalid address character '{}'", c),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResponseParseError {}
