//! Mock timer implementations for testing

use crate::platform::{
    Result,
    traits::{IdleTimerInterface, TimerInterface},
};

/// Mock timer implementation
///
/// Uses simulated time: delays advance the clock instead of blocking, and the
/// clock can be moved directly to script capture timelines.
#[derive(Debug)]
pub struct MockTimer {
    now_us: u64,
}

impl MockTimer {
    /// Create a new mock timer at t=0
    pub fn new() -> Self {
        Self { now_us: 0 }
    }

    /// Move the simulated clock forward
    pub fn advance_us(&mut self, us: u64) {
        self.now_us = self.now_us.wrapping_add(us);
    }

    /// Set the simulated clock to an absolute timestamp
    pub fn set_now_us(&mut self, us: u64) {
        self.now_us = us;
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.wrapping_add(us as u64);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

/// Mock one-shot idle timer
///
/// Records armed state and the last programmed timeout; tests fire it by
/// calling `IrReceiver::on_idle_timeout` directly.
#[derive(Debug, Default)]
pub struct MockIdleTimer {
    armed: bool,
    last_timeout_us: u32,
    starts: u32,
}

impl MockIdleTimer {
    /// Create a new, disarmed mock idle timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeout passed to the most recent `start` call
    pub fn last_timeout_us(&self) -> u32 {
        self.last_timeout_us
    }

    /// Number of times `start` has been called
    pub fn starts(&self) -> u32 {
        self.starts
    }
}

impl IdleTimerInterface for MockIdleTimer {
    fn start(&mut self, timeout_us: u32) {
        self.armed = true;
        self.last_timeout_us = timeout_us;
        self.starts = self.starts.wrapping_add(1);
    }

    fn stop(&mut self) {
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_ms(2).unwrap();
        assert_eq!(timer.now_us(), 3000);
    }

    #[test]
    fn test_mock_timer_set_and_advance() {
        let mut timer = MockTimer::new();
        timer.set_now_us(500);
        assert_eq!(timer.now_us(), 500);

        timer.advance_us(250);
        assert_eq!(timer.now_us(), 750);
    }

    #[test]
    fn test_mock_idle_timer() {
        let mut timer = MockIdleTimer::new();
        assert!(!timer.is_armed());

        timer.start(300_000);
        assert!(timer.is_armed());
        assert_eq!(timer.last_timeout_us(), 300_000);
        assert_eq!(timer.starts(), 1);

        timer.stop();
        assert!(!timer.is_armed());
    }
}
