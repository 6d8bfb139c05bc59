// src/recorder/sync_recorder/mock.rs

//! Scripted stand-in for the bus: a simulated clock, a transmit log, and
//! sensor replies that land in the shared receive buffer after a delay.

use crate::common::{
    frame::LineState,
    hal_traits::{Sdi12Serial, Sdi12Timer},
    rx_buffer::RxBuffer,
};
use heapless::{Deque, Vec};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct MockIoError;

struct Reply {
    after_us: u64,
    bytes: &'static [u8],
}

pub(super) struct MockInterface<'a> {
    rx: &'a RxBuffer,
    pub now_us: u64,
    pub written: Vec<u8, 128>,
    pub line_log: Vec<(LineState, u64), 32>,
    /// Loop transmitted bytes back into the receiver like a half-duplex driver.
    pub echo: bool,
    /// `WouldBlock` this many times before accepting each byte.
    pub write_stalls: u32,
    pub fail_writes: bool,
    stalls_left: u32,
    replies: Deque<Reply, 8>,
    pending: Option<(u64, &'static [u8])>,
}

impl<'a> MockInterface<'a> {
    pub fn new(rx: &'a RxBuffer) -> Self {
        MockInterface {
            rx,
            now_us: 0,
            written: Vec::new(),
            line_log: Vec::new(),
            echo: true,
            write_stalls: 0,
            fail_writes: false,
            stalls_left: 0,
            replies: Deque::new(),
            pending: None,
        }
    }

    /// Queues the sensor's answer to the next command (one per `!` written).
    /// An empty reply models a sensor that stays silent.
    pub fn reply_after_ms(&mut self, after_ms: u64, bytes: &'static [u8]) {
        self.reply_after_us(after_ms * 1000, bytes);
    }

    pub fn reply_after_us(&mut self, after_us: u64, bytes: &'static [u8]) {
        assert!(self.replies.push_back(Reply { after_us, bytes }).is_ok(), "too many replies");
    }

    fn advance(&mut self, us: u64) {
        self.now_us += us;
        if let Some((at, bytes)) = self.pending {
            if self.now_us >= at {
                for &b in bytes {
                    self.rx.append(b);
                }
                self.pending = None;
            }
        }
    }
}

impl Sdi12Timer for MockInterface<'_> {
    fn delay_us(&mut self, us: u32) {
        self.advance(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(u64::from(ms) * 1000);
    }
}

impl Sdi12Serial for MockInterface<'_> {
    type Error = MockIoError;

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(nb::Error::Other(MockIoError));
        }
        if self.stalls_left > 0 {
            self.stalls_left -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.stalls_left = self.write_stalls;

        self.written.push(byte).map_err(|_| nb::Error::Other(MockIoError))?;
        if self.echo {
            self.rx.append(byte);
        }
        if byte == b'!' {
            if let Some(reply) = self.replies.pop_front() {
                self.pending = Some((self.now_us + reply.after_us, reply.bytes));
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        Ok(())
    }

    fn set_line(&mut self, state: LineState) -> Result<(), Self::Error> {
        self.line_log.push((state, self.now_us)).map_err(|_| MockIoError)?;
        if state == LineState::Break {
            self.stalls_left = self.write_stalls;
        }
        Ok(())
    }
}
