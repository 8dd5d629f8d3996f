//! RP2350 platform implementation for Raspberry Pi Pico 2 W
//!
//! This module provides concrete implementations of the platform abstraction
//! traits for the RP2350 microcontroller using the `rp235x-hal` crate.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! irlearn = { version = "0.1", features = ["pico2_w"] }
//! ```
//!
//! # Interrupt Wiring
//!
//! The capture state machine is driven from two interrupt handlers the
//! firmware provides:
//!
//! - `IO_IRQ_BANK0`: call [`Rp2350IrPin::clear_interrupt`], read the
//!   monotonic counter, and invoke `IrReceiver::on_edge(now_us)`.
//! - `TIMER_IRQ_0`: call [`Rp2350IdleTimer::clear_interrupt`] and invoke
//!   `IrReceiver::on_idle_timeout(now_us)`.
//!
//! Both handlers touch the same receiver, so the firmware wraps it in a
//! `critical_section::Mutex` (the usual rp235x-hal pattern); the receiver's
//! own re-entrancy guard only covers nested invocation, not mutual
//! exclusion.

mod gpio;
mod pwm;
mod timer;

pub use gpio::Rp2350IrPin;
pub use pwm::Rp2350Pwm;
pub use timer::{Rp2350IdleTimer, Rp2350Timer};
