//! Timer interface traits
//!
//! Two timing primitives: a monotonic microsecond clock with blocking delays
//! (used by the encoder to pace marks and spaces), and a one-shot idle timer
//! armable from interrupt context (used by the capturer to detect
//! end-of-transmission).

use crate::platform::Result;

/// Timer interface trait
///
/// Delays are busy-waits; IR bit timing needs microsecond precision, so
/// implementations must not yield to a scheduler mid-delay.
pub trait TimerInterface {
    /// Block for the given number of microseconds
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Monotonic microsecond timestamp
    fn now_us(&self) -> u64;
}

/// One-shot idle timer interface
///
/// The capture state machine arms this on every edge; if it fires, no edge
/// arrived for the configured duration and the transmission is over. Both
/// methods must be callable from interrupt context.
pub trait IdleTimerInterface {
    /// Arm (or re-arm) the one-shot for `timeout_us` microseconds from now
    fn start(&mut self, timeout_us: u32);

    /// Cancel the one-shot if armed
    fn stop(&mut self);

    /// Return true if the one-shot is currently armed
    fn is_armed(&self) -> bool;
}
