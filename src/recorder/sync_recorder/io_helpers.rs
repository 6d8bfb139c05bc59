// src/recorder/sync_recorder/io_helpers.rs

use super::SyncRecorder;
use crate::common::{
    error::Sdi12Error,
    frame::LineState,
    hal_traits::{Sdi12Serial, Sdi12Timer},
    timing,
};
use core::time::Duration;
use heapless::Vec;
use nb::Result as NbResult;

#[inline]
fn as_us(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}

/// Locates the response in a receive buffer snapshot.
///
/// With `require_echo` the response starts after the last `!` (the tail of
/// our own echoed command); otherwise at the start of the buffer. It ends at
/// the first `<CR><LF>` after that point, which is not included.
pub(super) fn extract_payload(snapshot: &[u8], require_echo: bool) -> Option<&[u8]> {
    let start = if require_echo {
        snapshot.iter().rposition(|&b| b == b'!')? + 1
    } else {
        0
    };
    let rest = &snapshot[start..];
    let end = rest.windows(2).position(|w| w == b"\r\n")?;
    Some(&rest[..end])
}

// Implementation block for I/O related helpers
impl<IF, const N: usize> SyncRecorder<'_, IF, N>
where
    IF: Sdi12Serial + Sdi12Timer,
{
    /// Executes a non-blocking I/O operation (`f`) repeatedly until it
    /// stops returning `WouldBlock`, returning the final result or a timeout error.
    ///
    /// The timeout is counted in retry back-offs, so no clock is needed.
    pub(super) fn execute_blocking_io_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        mut f: FN,
    ) -> Result<T, Sdi12Error<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let mut waited = Duration::ZERO;
        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if waited >= timeout {
                        return Err(Sdi12Error::Timeout);
                    }
                    self.interface.delay_us(as_us(timing::WRITE_RETRY_INTERVAL));
                    waited += timing::WRITE_RETRY_INTERVAL;
                }
                Err(nb::Error::Other(e)) => return Err(Sdi12Error::Io(e)),
            }
        }
    }

    /// Wakes every sensor on the bus (break, then marking) and transmits `cmd_bytes`.
    pub(super) fn wake_and_send(&mut self, cmd_bytes: &[u8]) -> Result<(), Sdi12Error<IF::Error>> {
        self.interface.set_line(LineState::Break).map_err(Sdi12Error::Io)?;
        self.interface.delay_us(as_us(timing::WAKE_BREAK_DURATION));
        self.interface.set_line(LineState::Mark).map_err(Sdi12Error::Io)?;
        self.interface.delay_us(as_us(timing::WAKE_MARK_DURATION));
        self.interface.set_line(LineState::Released).map_err(Sdi12Error::Io)?;

        let write_duration = timing::BYTE_DURATION * cmd_bytes.len() as u32;
        let write_timeout = write_duration + timing::WRITE_TIMEOUT_SLACK;

        for byte in cmd_bytes {
            self.execute_blocking_io_with_timeout(write_timeout, |iface| iface.write_byte(*byte))?;
        }
        self.execute_blocking_io_with_timeout(write_timeout, |iface| iface.flush())
    }

    /// Polls the receive buffer until a complete response line is present.
    ///
    /// Sleeps before every look, so a silent bus returns `Timeout` after
    /// exactly `max_polls` sleeps of `poll_interval`.
    pub(super) fn wait_for_terminator(&mut self) -> Result<Vec<u8, N>, Sdi12Error<IF::Error>> {
        let interval = as_us(self.poll.poll_interval);
        for poll in 0..self.poll.max_polls {
            self.interface.delay_us(interval);
            let snapshot = self.rx.snapshot();
            if let Some(payload) = extract_payload(&snapshot, self.poll.require_echo) {
                trace!("response complete after {} polls", poll + 1);
                return Vec::from_slice(payload)
                    .map_err(|_| Sdi12Error::BufferOverflow { needed: payload.len(), got: N });
            }
        }
        Err(Sdi12Error::Timeout)
    }

    /// Polls the receive buffer until `sequence` appears anywhere in it.
    pub(super) fn wait_for_sequence(&mut self, sequence: &[u8]) -> Result<(), Sdi12Error<IF::Error>> {
        if sequence.is_empty() {
            return Ok(());
        }
        let interval = as_us(self.poll.poll_interval);
        for _ in 0..self.poll.max_polls {
            self.interface.delay_us(interval);
            let snapshot = self.rx.snapshot();
            if snapshot.windows(sequence.len()).any(|w| w == sequence) {
                return Ok(());
            }
        }
        Err(Sdi12Error::Timeout)
    }
}
