//! SDI-12 command definitions.
//!
//! Only the recorder-side subset used by the command engine is modelled here.
//! See SDI-12 Specification v1.4, Section 4.4 "Command set".

use arrayvec::ArrayString;
use core::fmt::{self, Write};

use super::address::Sdi12Addr;

/// Longest command we build is `aMC!` / `aD0!` / `aAb!` (4 bytes); leave headroom.
pub const MAX_COMMAND_LEN: usize = 8;

/// Per-call buffer holding one formatted command string.
pub type CommandBuffer = ArrayString<MAX_COMMAND_LEN>;

/// Failure to turn a [`Command`] into wire bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandFormatError {
    /// The formatted command does not fit in [`CommandBuffer`].
    BufferFull,
    /// A data index outside `0..=9`.
    InvalidIndex(u8),
}

/// Represents an SDI-12 command sent by the recorder.
///
/// The `Display` implementation produces the exact wire string, e.g. `aM!`, `aD0!`, `aAb!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Acknowledge Active (`a!`).
    AcknowledgeActive { address: Sdi12Addr },

    /// Address Query (`?!`). Only valid with a single sensor on the bus.
    AddressQuery,

    /// Change Address (`aAb!`).
    ChangeAddress { address: Sdi12Addr, new_address: Sdi12Addr },

    /// Start Measurement (`aM!`). Answered with `atttn`.
    StartMeasurement { address: Sdi12Addr },

    /// Start Measurement, data lines carry a CRC (`aMC!`).
    StartMeasurementCrc { address: Sdi12Addr },

    /// Start Concurrent Measurement (`aC!`). Answered with `atttnn`.
    StartConcurrentMeasurement { address: Sdi12Addr },

    /// Send Data (`aD0!`..`aD9!`).
    SendData { address: Sdi12Addr, index: u8 },

    /// Send Identification (`aI!`).
    SendIdentification { address: Sdi12Addr },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AcknowledgeActive { address } => write!(f, "{}!", address),
            Command::AddressQuery => f.write_str("?!"),
            Command::ChangeAddress { address, new_address } => {
                write!(f, "{}A{}!", address, new_address)
            }
            Command::StartMeasurement { address } => write!(f, "{}M!", address),
            Command::StartMeasurementCrc { address } => write!(f, "{}MC!", address),
            Command::StartConcurrentMeasurement { address } => write!(f, "{}C!", address),
            Command::SendData { address, index } => {
                if *index <= 9 {
                    write!(f, "{}D{}!", address, index)
                } else {
                    Err(fmt::Error)
                }
            }
            Command::SendIdentification { address } => write!(f, "{}I!", address),
        }
    }
}

impl Command {
    /// Returns the address the command is directed to (`None` for `?!`).
    pub fn address(&self) -> Option<Sdi12Addr> {
        match self {
            Command::AddressQuery => None,
            Command::AcknowledgeActive { address }
            | Command::ChangeAddress { address, .. }
            | Command::StartMeasurement { address }
            | Command::StartMeasurementCrc { address }
            | Command::StartConcurrentMeasurement { address }
            | Command::SendData { address, .. }
            | Command::SendIdentification { address } => Some(*address),
        }
    }

    /// Formats the command into a fresh stack buffer.
    pub fn format_into(&self) -> Result<CommandBuffer, CommandFormatError> {
        if let Command::SendData { index, .. } = self {
            if *index > 9 {
                return Err(CommandFormatError::InvalidIndex(*index));
            }
        }
        let mut buffer = CommandBuffer::new();
        write!(buffer, "{}", self).map_err(|_| CommandFormatError::BufferFull)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String as HeaplessString;

    fn addr(c: char) -> Sdi12Addr {
        Sdi12Addr::new(c).unwrap()
    }

    #[test]
    fn test_command_formatting() {
        assert_eq!(Command::AcknowledgeActive { address: addr('1') }.to_string(), "1!");
        assert_eq!(Command::AddressQuery.to_string(), "?!");
        assert_eq!(
            Command::ChangeAddress { address: addr('1'), new_address: addr('2') }.to_string(),
            "1A2!"
        );
        assert_eq!(Command::StartMeasurement { address: addr('1') }.to_string(), "1M!");
        assert_eq!(Command::StartMeasurementCrc { address: addr('1') }.to_string(), "1MC!");
        assert_eq!(Command::StartConcurrentMeasurement { address: addr('1') }.to_string(), "1C!");
        assert_eq!(Command::SendData { address: addr('1'), index: 0 }.to_string(), "1D0!");
        assert_eq!(Command::SendData { address: addr('1'), index: 9 }.to_string(), "1D9!");
        assert_eq!(Command::SendIdentification { address: addr('1') }.to_string(), "1I!");
    }

    #[test]
    fn test_every_address_frames_correctly() {
        let addresses = ('0'..='9').chain('a'..='z').chain('A'..='Z');
        for c in addresses {
            let a = addr(c);
            let commands = [
                Command::AcknowledgeActive { address: a },
                Command::ChangeAddress { address: a, new_address: addr('5') },
                Command::StartMeasurement { address: a },
                Command::StartMeasurementCrc { address: a },
                Command::StartConcurrentMeasurement { address: a },
                Command::SendData { address: a, index: 0 },
                Command::SendIdentification { address: a },
            ];
            for cmd in commands {
                let buf = cmd.format_into().unwrap();
                assert!(buf.starts_with(c), "{buf} should start with {c}");
                assert!(buf.ends_with('!'), "{buf} should end with '!'");
            }
        }
    }

    #[test]
    fn test_invalid_data_index_format() {
        let cmd_d10 = Command::SendData { address: addr('1'), index: 10 };
        let mut output = HeaplessString::<8>::new();
        assert!(write!(output, "{}", cmd_d10).is_err());
        assert_eq!(cmd_d10.format_into(), Err(CommandFormatError::InvalidIndex(10)));
    }

    #[test]
    fn test_address_retrieval() {
        assert_eq!(Command::AcknowledgeActive { address: addr('0') }.address(), Some(addr('0')));
        assert_eq!(Command::AddressQuery.address(), None);
        assert_eq!(
            Command::ChangeAddress { address: addr('1'), new_address: addr('2') }.address(),
            Some(addr('1'))
        );
        assert_eq!(Command::SendData { address: addr('6'), index: 0 }.address(), Some(addr('6')));
    }
}
