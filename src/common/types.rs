// src/common/types.rs

use core::str::FromStr;

/// Value written into every measurement slot that has no valid reading.
///
/// Lets downstream consumers tell "no reading" apart from a legitimate zero.
pub const SENTINEL_VALUE: f32 = -9999.0;

// --- SDI-12 Standard Data Value (`<values>`) ---

/// A single data value as returned in the `<values>` part of a `aDn!` response.
/// Format: `p[d.d]` where p is '+' or '-', d are digits, '.' is optional.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Sdi12Value(f32);

impl Sdi12Value {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn as_f32(&self) -> f32 {
        self.0
    }

    /// Parses the value token at the start of `bytes` and reports how many bytes it used.
    ///
    /// Works like C `strtod` restricted to SDI-12 values: optional leading
    /// spaces, optional sign, digits with at most one decimal point. The token
    /// ends at the first byte that cannot continue it, which for packed data
    /// lines (`+1.5-2.25+3`) is the next value's sign. Returns `None` when no
    /// digits are found.
    pub fn parse_prefix(bytes: &[u8]) -> Option<(Self, usize)> {
        let mut pos = bytes.iter().take_while(|b| **b == b' ').count();
        let token_start = pos;

        if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
            pos += 1;
        }

        let mut digits = 0;
        let mut decimal_found = false;
        while let Some(&b) = bytes.get(pos) {
            match b {
                b'0'..=b'9' => digits += 1,
                b'.' if !decimal_found => decimal_found = true,
                _ => break,
            }
            pos += 1;
        }
        if digits == 0 {
            return None;
        }

        let token = core::str::from_utf8(&bytes[token_start..pos]).ok()?;
        let value = f32::from_str(token).ok()?;
        Some((Self(value), pos))
    }
}

impl From<Sdi12Value> for f32 {
    fn from(value: Sdi12Value) -> Self {
        value.0
    }
}
