// src/recorder/config.rs

use crate::common::timing::{DEFAULT_MAX_POLLS, DEFAULT_POLL_INTERVAL};
use core::time::Duration;

/// How long the recorder waits for a response, and what it waits for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Number of times the receive buffer is inspected before giving up.
    pub max_polls: u16,
    /// Sleep before each inspection.
    pub poll_interval: Duration,
    /// Only accept a response that follows the echo of our own command (`!`).
    ///
    /// Most half-duplex line drivers loop transmitted bytes back into the
    /// receiver. Turn this off for drivers that do not, and the response is
    /// then read from the start of the buffer.
    pub require_echo: bool,
}

impl PollConfig {
    /// Upper bound on the time spent waiting for one response.
    pub fn max_wait(&self) -> Duration {
        self.poll_interval * u32::from(self.max_polls)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            max_polls: DEFAULT_MAX_POLLS,
            poll_interval: DEFAULT_POLL_INTERVAL,
            require_echo: true,
        }
    }
}
