// src/common/rx_buffer.rs

//! Receive buffer shared between the UART receive interrupt and the recorder.
//!
//! Exactly one producer (the byte-arrival handler) calls [`RxBuffer::append`];
//! exactly one consumer (the recorder) calls [`RxBuffer::clear`] and
//! [`RxBuffer::snapshot`]. The recorder clears the buffer before every command
//! it transmits, so everything observed afterwards belongs to that command's
//! response. All state is held in atomics (plain loads and stores, no
//! compare-and-swap) so a `static` buffer works on every target without locks.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use heapless::Vec;

/// Default capacity: one explicit value, cursor arithmetic is modulo this.
pub const RX_BUFFER_CAPACITY: usize = 256;

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: AtomicU8 = AtomicU8::new(0);

/// Fixed-capacity circular byte buffer. Once full, new bytes overwrite the oldest.
pub struct RxBuffer<const N: usize = RX_BUFFER_CAPACITY> {
    data: [AtomicU8; N],
    /// Next slot to write, always `< N`.
    head: AtomicUsize,
    /// Number of valid bytes, saturates at `N`.
    len: AtomicUsize,
}

impl<const N: usize> RxBuffer<N> {
    /// Creates an empty buffer. Usable in a `static`.
    pub const fn new() -> Self {
        assert!(N > 0, "RxBuffer capacity must be non-zero");
        RxBuffer {
            data: [EMPTY_SLOT; N],
            head: AtomicUsize::new(0),
            len: AtomicUsize::new(0),
        }
    }

    /// Stores one received byte. Called from the byte-arrival context only.
    ///
    /// Never blocks; when the buffer is full the oldest byte is overwritten.
    /// NUL bytes are dropped: many UARTs report the wake break as a 0x00.
    #[inline]
    pub fn append(&self, byte: u8) {
        if byte == 0 {
            return;
        }
        let head = self.head.load(Ordering::Relaxed);
        self.data[head].store(byte, Ordering::Relaxed);
        self.head.store((head + 1) % N, Ordering::Release);

        let len = self.len.load(Ordering::Relaxed);
        if len < N {
            self.len.store(len + 1, Ordering::Release);
        }
    }

    /// Drops all content and rewinds the write cursor.
    pub fn clear(&self) {
        self.len.store(0, Ordering::Release);
        self.head.store(0, Ordering::Release);
        for slot in self.data.iter() {
            slot.store(0, Ordering::Relaxed);
        }
    }

    /// Copies the current content out, oldest byte first. Does not modify the buffer.
    pub fn snapshot(&self) -> Vec<u8, N> {
        // `len` before `head`: a byte landing in between only shifts the window forward.
        let len = self.len.load(Ordering::Acquire);
        let head = self.head.load(Ordering::Acquire);
        let start = (head + N - len) % N;

        let mut out = Vec::new();
        for i in 0..len {
            // Cannot overflow: len <= N
            let _ = out.push(self.data[(start + i) % N].load(Ordering::Relaxed));
        }
        out
    }

    /// Number of valid bytes currently held.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for RxBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for RxBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RxBuffer")
            .field("len", &self.len())
            .field("capacity", &N)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHARED: RxBuffer<16> = RxBuffer::new();

    #[test]
    fn test_append_and_snapshot() {
        let buffer: RxBuffer<8> = RxBuffer::new();
        assert!(buffer.is_empty());
        for &b in b"0!0\r\n" {
            buffer.append(b);
        }
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.snapshot().as_slice(), b"0!0\r\n");
        // Snapshot does not consume
        assert_eq!(buffer.snapshot().as_slice(), b"0!0\r\n");
    }

    #[test]
    fn test_wrap_keeps_newest_bytes_in_order() {
        let buffer: RxBuffer<8> = RxBuffer::new();
        for b in 0u8..10 {
            buffer.append(b);
        }
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.snapshot().as_slice(), &[2, 3, 4, 5, 6, 7, 8, 9]);

        buffer.append(10);
        assert_eq!(buffer.snapshot().as_slice(), &[3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_nul_bytes_dropped() {
        let buffer: RxBuffer<8> = RxBuffer::new();
        for &b in b"\x000\x00+1\r\n" {
            buffer.append(b);
        }
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.snapshot().as_slice(), b"0+1\r\n");
    }

    #[test]
    fn test_exactly_full() {
        let buffer: RxBuffer<4> = RxBuffer::new();
        for &b in b"abcd" {
            buffer.append(b);
        }
        assert_eq!(buffer.snapshot().as_slice(), b"abcd");
    }

    #[test]
    fn test_clear_resets_content_and_cursor() {
        let buffer: RxBuffer<4> = RxBuffer::new();
        for &b in b"stale!" {
            buffer.append(b);
        }
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.snapshot().is_empty());

        buffer.append(b'x');
        assert_eq!(buffer.snapshot().as_slice(), b"x");
    }

    #[test]
    fn test_static_buffer_shared_across_threads() {
        SHARED.clear();
        let producer = std::thread::spawn(|| {
            for &b in b"1+3.5\r\n" {
                SHARED.append(b);
            }
        });
        producer.join().unwrap();
        assert_eq!(SHARED.snapshot().as_slice(), b"1+3.5\r\n");
        assert_eq!(SHARED.capacity(), 16);
    }

    #[test]
    fn test_default_capacity() {
        let buffer: RxBuffer = RxBuffer::default();
        assert_eq!(buffer.capacity(), RX_BUFFER_CAPACITY);
    }
}
