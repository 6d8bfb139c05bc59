// src/common/timing.rs

use core::time::Duration;

// Nominal values only. Break timing tolerances are left to the line driver.

// === Wake Sequence (Sec 7.0, 7.1) ===

/// Break (spacing) held on the line before every command.
pub const WAKE_BREAK_DURATION: Duration = Duration::from_millis(12);
/// Marking held after the break before the first command byte.
pub const WAKE_MARK_DURATION: Duration = Duration::from_micros(8400);

// === Response Polling ===

/// Sensors start answering within 15 ms, but 1000 ms total is allowed for slow ones.
pub const DEFAULT_MAX_POLLS: u16 = 200;
/// Sleep between two looks at the receive buffer.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5);

// === Byte Timing at 1200 Baud (7E1) ===
// 1 start bit + 7 data bits + 1 parity bit + 1 stop bit = 10 bits per byte

/// Nominal duration of a single byte (10 bits total) at 1200 baud.
pub const BYTE_DURATION: Duration = Duration::from_micros(8333);

/// Back-off between retries of a UART write that returned `WouldBlock`.
pub const WRITE_RETRY_INTERVAL: Duration = Duration::from_micros(100);
/// Slack added to the nominal transmit time before a write is abandoned.
pub const WRITE_TIMEOUT_SLACK: Duration = Duration::from_millis(20);

// === Measurement ===

/// `ttt` in a measurement ack is in seconds.
pub const MEASUREMENT_DELAY_UNIT_MS: u32 = 1000;
