// src/common/hal_adapter.rs

//! [`Sdi12Serial`] and [`Sdi12Timer`] on top of the `embedded-hal` 1.0 and
//! `embedded-io` traits.
//!
//! The adapter expects the usual recorder wiring: a UART (1200 baud, 7E1,
//! configured by the caller) for command bytes, plus one GPIO that forces the
//! line to spacing while it is driven high. Received bytes still reach the
//! recorder through the UART interrupt and the shared [`RxBuffer`](super::RxBuffer).

use super::frame::LineState;
use super::hal_traits::{Sdi12Serial, Sdi12Timer};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_io::Write;

/// Error from either half of a [`GenericHalInterface`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GenericHalError<P, U> {
    /// The break control pin failed.
    Pin(P),
    /// The UART failed.
    Uart(U),
    /// The UART accepted none of the bytes it was given.
    WriteZero,
}

pub struct GenericHalInterface<PIN, UART, DELAY> {
    break_pin: PIN,
    uart: UART,
    delay: DELAY,
}

impl<PIN, UART, DELAY> GenericHalInterface<PIN, UART, DELAY>
where
    PIN: OutputPin,
    UART: Write,
    DELAY: DelayNs,
{
    pub fn new(break_pin: PIN, uart: UART, delay: DELAY) -> Self {
        GenericHalInterface { break_pin, uart, delay }
    }

    /// Gives the peripherals back.
    pub fn release(self) -> (PIN, UART, DELAY) {
        (self.break_pin, self.uart, self.delay)
    }
}

impl<PIN, UART, DELAY> Sdi12Timer for GenericHalInterface<PIN, UART, DELAY>
where
    DELAY: DelayNs,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

impl<PIN, UART, DELAY> Sdi12Serial for GenericHalInterface<PIN, UART, DELAY>
where
    PIN: OutputPin,
    UART: Write,
{
    type Error = GenericHalError<PIN::Error, UART::Error>;

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        match self.uart.write(&[byte]) {
            // `write` blocks until it makes progress, so 0 is a broken UART
            Ok(0) => Err(nb::Error::Other(GenericHalError::WriteZero)),
            Ok(_) => Ok(()),
            Err(e) => Err(nb::Error::Other(GenericHalError::Uart(e))),
        }
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.uart
            .flush()
            .map_err(|e| nb::Error::Other(GenericHalError::Uart(e)))
    }

    fn set_line(&mut self, state: LineState) -> Result<(), Self::Error> {
        // Mark is the idle level of the UART, so it and Released share the pin state
        let result = match state {
            LineState::Break => self.break_pin.set_high(),
            LineState::Mark | LineState::Released => self.break_pin.set_low(),
        };
        result.map_err(GenericHalError::Pin)
    }
}
