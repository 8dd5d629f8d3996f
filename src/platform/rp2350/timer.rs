//! RP2350 Timer implementation
//!
//! This module provides timing support for RP2350 using the `rp235x-hal`
//! crate: blocking microsecond delays plus the monotonic counter, and a
//! one-shot idle timer over hardware alarm 0.

use crate::platform::{
    Result,
    traits::{IdleTimerInterface, TimerInterface},
};
use rp235x_hal::fugit::MicrosDurationU32;
use rp235x_hal::timer::{Alarm, Alarm0, Timer};

/// RP2350 Timer implementation
///
/// Wraps the `rp235x-hal` timer to implement the `TimerInterface` trait.
///
/// # Note
///
/// The RP2350 timer is a 64-bit microsecond timer that provides accurate
/// timing and delay functionality.
pub struct Rp2350Timer {
    timer: Timer,
}

impl Rp2350Timer {
    /// Create a new RP2350 Timer instance
    ///
    /// # Arguments
    ///
    /// * `timer` - The HAL timer peripheral
    pub fn new(timer: Timer) -> Self {
        Self { timer }
    }
}

impl TimerInterface for Rp2350Timer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        use embedded_hal::blocking::delay::DelayUs;
        self.timer.delay_us(us);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        use embedded_hal::blocking::delay::DelayMs;
        self.timer.delay_ms(ms);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.timer.get_counter().ticks()
    }
}

/// RP2350 one-shot idle timer over hardware alarm 0
///
/// The capture state machine re-arms this on every edge; `schedule` on an
/// already-armed alarm replaces the pending expiry. The firmware's
/// `TIMER_IRQ_0` handler must call
/// [`clear_interrupt`](Rp2350IdleTimer::clear_interrupt) before invoking
/// `IrReceiver::on_idle_timeout`.
pub struct Rp2350IdleTimer {
    alarm: Alarm0,
    armed: bool,
}

impl Rp2350IdleTimer {
    /// Create a new idle timer from the timer peripheral's alarm 0
    pub fn new(alarm: Alarm0) -> Self {
        Self {
            alarm,
            armed: false,
        }
    }

    /// Acknowledge the alarm interrupt (call from the IRQ handler)
    pub fn clear_interrupt(&mut self) {
        self.alarm.clear_interrupt();
        self.armed = false;
    }
}

impl IdleTimerInterface for Rp2350IdleTimer {
    fn start(&mut self, timeout_us: u32) {
        if self
            .alarm
            .schedule(MicrosDurationU32::micros(timeout_us))
            .is_ok()
        {
            self.alarm.enable_interrupt();
            self.armed = true;
        }
    }

    fn stop(&mut self) {
        self.alarm.disable_interrupt();
        let _ = self.alarm.cancel();
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}
