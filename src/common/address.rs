// src/common/address.rs

use super::error::Sdi12Error;
use core::convert::TryFrom;
use core::fmt;

/// A single-character SDI-12 sensor address (`0`-`9`, `a`-`z`, `A`-`Z`).
///
/// The wildcard `?` used by the address query command is not a sensor address;
/// it is written directly by [`Command::AddressQuery`](super::command::Command::AddressQuery).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Sdi12Addr(char);

impl Sdi12Addr {
    pub const DEFAULT_ADDRESS: Sdi12Addr = Sdi12Addr('0');

    /// Creates a new `Sdi12Addr` if the given character is a valid address.
    /// Returns `Result<Self, Sdi12Error<()>>` because validation itself
    /// cannot cause an I/O error.
    pub fn new(address_char: char) -> Result<Self, Sdi12Error<()>> {
        if Self::is_valid_address_char(address_char) {
            Ok(Sdi12Addr(address_char))
        } else {
            Err(Sdi12Error::InvalidAddress(address_char))
        }
    }

    /// Builds an address from a received byte (first byte of a response).
    pub fn from_byte(byte: u8) -> Result<Self, Sdi12Error<()>> {
        Self::new(byte as char)
    }

    #[inline]
    pub const fn as_char(&self) -> char {
        self.0
    }

    /// The address as the single ASCII byte that goes on the wire.
    #[inline]
    pub const fn as_byte(&self) -> u8 {
        // Valid addresses are ASCII alphanumerics
        self.0 as u8
    }

    #[inline]
    pub const fn is_standard(&self) -> bool {
        matches!(self.0, '0'..='9')
    }

    #[inline]
    pub const fn is_extended(&self) -> bool {
        matches!(self.0, 'a'..='z' | 'A'..='Z')
    }

    #[inline]
    pub const fn is_valid_address_char(c: char) -> bool {
        matches!(c, '0'..='9' | 'a'..='z' | 'A'..='Z')
    }
}

impl Default for Sdi12Addr {
    fn default() -> Self {
        Self::DEFAULT_ADDRESS
    }
}

impl TryFrom<char> for Sdi12Addr {
    type Error = Sdi12Error<()>;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sdi12Addr> for char {
    fn from(value: Sdi12Addr) -> Self {
        value.0
    }
}

impl fmt::Display for Sdi12Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for c in ['0', '5', '9', 'a', 'z', 'A', 'Z'] {
            assert!(Sdi12Addr::new(c).is_ok(), "{c} should be valid");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(matches!(Sdi12Addr::new(' '), Err(Sdi12Error::InvalidAddress(' '))));
        assert!(matches!(Sdi12Addr::new('$'), Err(Sdi12Error::InvalidAddress('$'))));
        assert!(matches!(Sdi12Addr::new('\n'), Err(Sdi12Error::InvalidAddress('\n'))));
        assert!(matches!(Sdi12Addr::new('é'), Err(Sdi12Error::InvalidAddress('é'))));
        // The query wildcard is a command, not an address
        assert!(matches!(Sdi12Addr::new('?'), Err(Sdi12Error::InvalidAddress('?'))));
    }

    #[test]
    fn test_address_classes() {
        assert!(Sdi12Addr::new('3').unwrap().is_standard());
        assert!(!Sdi12Addr::new('3').unwrap().is_extended());
        assert!(Sdi12Addr::new('q').unwrap().is_extended());
        assert!(Sdi12Addr::new('Q').unwrap().is_extended());
        assert_eq!(Sdi12Addr::default(), Sdi12Addr('0'));
    }

    #[test]
    fn test_try_from_char_and_byte() {
        assert_eq!(Sdi12Addr::try_from('1').unwrap(), Sdi12Addr('1'));
        assert_eq!(Sdi12Addr::try_from('b').unwrap(), Sdi12Addr('b'));
        assert_eq!(Sdi12Addr::from_byte(b'C').unwrap(), Sdi12Addr('C'));
        assert!(matches!(Sdi12Addr::from_byte(b'\r'), Err(Sdi12Error::InvalidAddress('\r'))));
        assert!(matches!(Sdi12Addr::try_from('*'), Err(Sdi12Error::InvalidAddress('*'))));
    }

    #[test]
    fn test_display_and_byte() {
        let a = Sdi12Addr::new('x').unwrap();
        assert_eq!(a.to_string(), "x");
        assert_eq!(a.as_byte(), b'x');
        assert_eq!(char::from(a), 'x');
    }
}
