//! Raw timing buffer
//!
//! An ordered sequence of mark/space durations in microseconds. Entries at
//! even indices are marks, odd indices are spaces; the first mark of a frame
//! is the one following the long idle gap. Capacity is fixed because the
//! buffer is filled from interrupt context.

/// Length of the raw receive duration buffer
pub const RAW_BUFFER_LEN: usize = 512;

/// Fixed-capacity duration buffer
///
/// `push` saturates: once `RAW_BUFFER_LEN` entries are stored further pushes
/// are dropped and reported, never a panic or an overwrite. The capture state
/// machine uses that report to force an early stop.
pub struct RawTimingBuffer {
    entries: [u32; RAW_BUFFER_LEN],
    len: usize,
}

impl RawTimingBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            entries: [0; RAW_BUFFER_LEN],
            len: 0,
        }
    }

    /// Number of stored durations
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if no durations are stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return true if the buffer is at capacity
    pub fn is_full(&self) -> bool {
        self.len >= RAW_BUFFER_LEN
    }

    /// Append a duration; returns false (and drops it) when full
    pub fn push(&mut self, duration_us: u32) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries[self.len] = duration_us;
        self.len += 1;
        true
    }

    /// Drop all durations and zero the storage
    pub fn clear(&mut self) {
        self.entries = [0; RAW_BUFFER_LEN];
        self.len = 0;
    }

    /// Stored durations, marks at even indices
    pub fn as_slice(&self) -> &[u32] {
        &self.entries[..self.len]
    }

    /// Replace this buffer's contents with a copy of `other`
    pub fn copy_from(&mut self, other: &RawTimingBuffer) {
        self.entries = other.entries;
        self.len = other.len;
    }

    /// Load durations from a slice, truncating at capacity (test scaffolding)
    pub fn from_durations(durations: &[u32]) -> Self {
        let mut buf = Self::new();
        for &d in durations {
            if !buf.push(d) {
                break;
            }
        }
        buf
    }
}

impl Default for RawTimingBuffer {
    fn default() -> Self {
        Self::new()
    }
}
