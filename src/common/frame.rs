// src/common/frame.rs

/// Level the recorder drives onto the SDI-12 data line outside of UART traffic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LineState {
    /// Continuous spacing used as the wake-up break.
    Break,
    /// Marking (idle) level held between the break and the first command byte.
    Mark,
    /// Line handed back to the UART transmitter/receiver.
    Released,
}
