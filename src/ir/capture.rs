//! Capture state machine
//!
//! Converts GPIO edge transitions into a completed [`RawTimingBuffer`]. The
//! handler runs once per electrical transition of the receive pin, from
//! interrupt context; a one-shot idle timer forces a synthetic stop when the
//! signal goes quiet.
//!
//! ```text
//! HIGH
//! ~¯¯¯¯¯¯¯\__/¯¯\__/¯¯\__/¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯\__/¯¯\__/¯¯\__/¯¯¯¯(idle timeout)¯¯¯¯¯~
//! LOW     |              |                |              |
//! IDLE----|-----MARK-----|------SPACE-----|-----MARK-----|------IDLE---------------
//! ```
//!
//! With a learner-style receiver the carrier itself produces rapid level
//! toggles inside every logical mark; the handler coalesces anything closer
//! together than the mark timeout into a single mark+space pair, so the
//! buffer holds demodulated durations regardless of receiver type.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::platform::{GpioInterface, GpioMode, IdleTimerInterface, Result};

use super::buffer::RawTimingBuffer;
use super::decode::{DEFAULT_DECODERS, DecodedFrame, DecoderFn};

/// Receiver pin level
///
/// The detector output is active low: carrier present reads low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Mark,
    Space,
}

/// Capture state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Waiting for the first mark after an idle gap
    Idle,
    /// Measuring mark/space durations
    Accumulating,
    /// Stop requested (overflow or idle timeout); swap pending
    Stopped,
    /// A complete frame is ready to decode
    Captured,
}

/// Receiver configuration
#[derive(Debug, Clone, Copy)]
pub struct IrConfig {
    /// One-shot idle timeout: no edge for this long ends the frame
    pub idle_timeout_ms: u32,
    /// Coalescing threshold: a mark edge this long after the last recorded
    /// level change closes a mark+space pair
    pub mark_timeout_us: u32,
}

impl Default for IrConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: 300,
            mark_timeout_us: 200,
        }
    }
}

/// Interrupt-driven IR receiver
///
/// Owns the receive pin, the idle timer, the capture state, and the raw
/// buffer pair. The platform layer routes its edge interrupt to [`on_edge`]
/// and the idle timer expiry to [`on_idle_timeout`]; everything else runs
/// from the main loop.
///
/// Frame handoff is double-buffered: the handler fills the active buffer
/// while the ready buffer holds the previous frame for [`decode`]. The swap
/// happens entirely inside the stop transition, so decode never observes a
/// partially-copied frame. This is a single-outstanding-frame protocol, not
/// a queue: if a new frame completes before `decode`/`resume` consumed the
/// previous one, the previous frame is overwritten.
///
/// [`on_edge`]: IrReceiver::on_edge
/// [`on_idle_timeout`]: IrReceiver::on_idle_timeout
/// [`decode`]: IrReceiver::decode
pub struct IrReceiver<G: GpioInterface, T: IdleTimerInterface> {
    pin: G,
    idle_timer: T,
    config: IrConfig,
    decoders: &'static [DecoderFn],
    state: CaptureState,
    active: RawTimingBuffer,
    ready: RawTimingBuffer,
    start_us: u64,
    end_us: u64,
    // Re-entrancy guard: the idle timer fires from a different interrupt
    // context than the edge handler. A nested invocation is dropped, not
    // queued.
    in_handler: AtomicBool,
}

impl<G: GpioInterface, T: IdleTimerInterface> IrReceiver<G, T> {
    /// Create a receiver with the default decoder chain (BYTES only)
    pub fn new(pin: G, idle_timer: T, config: IrConfig) -> Self {
        Self::with_decoders(pin, idle_timer, config, DEFAULT_DECODERS)
    }

    /// Create a receiver with an explicit decoder priority chain
    pub fn with_decoders(
        pin: G,
        idle_timer: T,
        config: IrConfig,
        decoders: &'static [DecoderFn],
    ) -> Self {
        Self {
            pin,
            idle_timer,
            config,
            decoders,
            state: CaptureState::Idle,
            active: RawTimingBuffer::new(),
            ready: RawTimingBuffer::new(),
            start_us: 0,
            end_us: 0,
            in_handler: AtomicBool::new(false),
        }
    }

    /// Arm the receiver: configure the pin as an input and begin capturing
    pub fn enable(&mut self) -> Result<()> {
        self.pin.set_mode(GpioMode::Input)?;
        self.resume();
        Ok(())
    }

    /// Disarm the receiver: stop edge delivery and cancel the idle timer
    ///
    /// Best effort against a concurrently running handler; the re-entrancy
    /// guard covers synchronous nesting only.
    pub fn disable(&mut self) {
        self.pin.disable_edge_events();
        self.idle_timer.stop();
    }

    /// Discard any captured frame and re-arm for the next one
    pub fn resume(&mut self) {
        self.state = CaptureState::Idle;
        self.active.clear();
        self.pin.enable_edge_events();
    }

    /// Current capture state
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// The receive pin (for interrupt wiring and tests)
    pub fn pin_mut(&mut self) -> &mut G {
        &mut self.pin
    }

    /// The idle timer (for interrupt wiring and tests)
    pub fn idle_timer(&self) -> &T {
        &self.idle_timer
    }

    /// Edge interrupt entry point
    ///
    /// Call once per electrical transition of the receive pin with the
    /// current monotonic microsecond timestamp.
    pub fn on_edge(&mut self, now_us: u64) {
        if self
            .in_handler
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return;
        }
        self.run_handler(now_us);
        self.in_handler.store(false, Ordering::Release);
    }

    /// Idle timer expiry entry point
    ///
    /// Forces the stop transition: the signal has been quiet for the
    /// configured idle timeout, so the frame is complete.
    pub fn on_idle_timeout(&mut self, now_us: u64) {
        if self
            .in_handler
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return;
        }
        self.state = CaptureState::Stopped;
        self.run_handler(now_us);
        self.in_handler.store(false, Ordering::Release);
    }

    fn run_handler(&mut self, now_us: u64) {
        let level = if self.pin.read() {
            PinLevel::Space
        } else {
            PinLevel::Mark
        };

        // Buffer full: force an early stop rather than dropping data silently.
        if self.active.is_full() {
            self.state = CaptureState::Stopped;
        }

        match self.state {
            CaptureState::Idle => {
                if level == PinLevel::Mark {
                    self.active.clear();
                    self.start_us = now_us;
                    self.end_us = now_us;
                    self.state = CaptureState::Accumulating;
                    self.idle_timer.start(self.config.idle_timeout_ms * 1000);
                }
            }
            CaptureState::Accumulating => {
                if level == PinLevel::Space {
                    // Extends the current space (or rides through carrier
                    // toggles inside a mark).
                    self.end_us = now_us;
                } else if now_us.saturating_sub(self.end_us) >= self.config.mark_timeout_us as u64 {
                    // A mark this long after the last level change means a
                    // completed mark+space pair.
                    self.active.push((self.end_us - self.start_us) as u32);
                    self.start_us = self.end_us; // mark end is space start
                    self.end_us = now_us; // current time is space end
                    self.active.push((self.end_us - self.start_us) as u32);
                    self.start_us = now_us;
                    self.end_us = now_us;
                }
                self.idle_timer.start(self.config.idle_timeout_ms * 1000);
            }
            CaptureState::Stopped => {
                self.pin.disable_edge_events();
                self.idle_timer.stop();
                // Flush the final pending mark.
                self.active.push((self.end_us - self.start_us) as u32);
                // Double-buffer swap: decode reads `ready` while the next
                // capture refills `active`.
                self.ready.clear();
                self.ready.copy_from(&self.active);
                self.active.clear();
                self.start_us = now_us;
                self.end_us = now_us;
                self.state = CaptureState::Captured;
            }
            CaptureState::Captured => {}
        }
    }

    /// Attempt to decode the captured frame
    ///
    /// Non-blocking. Returns `None` immediately unless a frame has been
    /// captured. Each decoder in the priority chain is tried in order; the
    /// first success wins and the caller must invoke [`resume`] once the
    /// frame has been consumed. If no scheme matches, the capture is
    /// discarded and the receiver re-armed so it can never get stuck.
    ///
    /// [`resume`]: IrReceiver::resume
    pub fn decode(&mut self) -> Option<DecodedFrame> {
        if self.state != CaptureState::Captured {
            return None;
        }

        for decoder in self.decoders {
            if let Some(frame) = decoder(&self.ready) {
                return Some(frame);
            }
        }

        crate::log_debug!("decode: no scheme matched");
        // Throw away and start over.
        self.resume();
        None
    }

    /// The captured raw frame (valid after observing `Captured`)
    pub fn raw_frame(&self) -> &RawTimingBuffer {
        &self.ready
    }
}
