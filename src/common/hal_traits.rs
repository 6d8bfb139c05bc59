// src/common/hal_traits.rs

use super::frame::LineState;
use core::fmt::Debug;

/// Abstraction for the blocking delays the recorder needs.
///
/// Note: `GenericHalInterface` implements this on top of
/// `embedded_hal::delay::DelayNs` when the `impl-generic-hal` feature is on.
pub trait Sdi12Timer {
    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Transmit side of the SDI-12 line.
///
/// Received bytes do not come through this trait: the platform's receive
/// interrupt pushes them into an [`RxBuffer`](super::rx_buffer::RxBuffer)
/// shared with the recorder.
pub trait Sdi12Serial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Attempts to write a single byte to the serial interface.
    ///
    /// Returns `Ok(())` if the byte was accepted for transmission, or `Err(nb::Error::WouldBlock)`
    /// if the write buffer is full. Other errors are returned as `Err(nb::Error::Other(Self::Error))`.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer, ensuring all written bytes have been sent.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;

    /// Drives the data line to `state`.
    ///
    /// `Break` and `Mark` take the line away from the UART (e.g. through a
    /// control register or a pin mux); `Released` hands it back so command
    /// bytes can be transmitted and the response received.
    fn set_line(&mut self, state: LineState) -> Result<(), Self::Error>;
}
