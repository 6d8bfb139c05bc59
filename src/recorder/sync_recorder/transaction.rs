// src/recorder/sync_recorder/transaction.rs

use super::SyncRecorder;
use crate::common::{
    command::Command,
    error::Sdi12Error,
    hal_traits::{Sdi12Serial, Sdi12Timer},
};
use heapless::Vec;

impl<IF, const N: usize> SyncRecorder<'_, IF, N>
where
    IF: Sdi12Serial + Sdi12Timer,
{
    /// Clears the receive buffer, then wakes the bus and transmits `command`.
    ///
    /// The buffer is cleared before the first byte goes out so that everything
    /// seen afterwards belongs to this command.
    pub(super) fn send_command(&mut self, command: &Command) -> Result<(), Sdi12Error<IF::Error>> {
        let command_buffer = command.format_into()?;
        self.rx.clear();
        debug!("sdi12 -> {}", command_buffer.as_str());
        self.wake_and_send(command_buffer.as_bytes())
    }

    /// One command/response exchange. Returns the response payload (address
    /// onwards, without `<CR><LF>`). No retries: a silent sensor is `Timeout`.
    pub(super) fn execute_transaction(
        &mut self,
        command: &Command,
    ) -> Result<Vec<u8, N>, Sdi12Error<IF::Error>> {
        self.send_command(command)?;
        match self.wait_for_terminator() {
            Ok(payload) => {
                trace!(
                    "sdi12 <- {}",
                    core::str::from_utf8(&payload).unwrap_or("<non-ascii>")
                );
                Ok(payload)
            }
            Err(e) => {
                warn!("sdi12 {} failed: {:?}", command, e);
                Err(e)
            }
        }
    }
}
