//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the peripherals the IR
//! engine drives: the receive pin with its edge-detect unit, the PWM carrier
//! output, the microsecond clock, and the one-shot idle timer.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    GpioInterface, GpioMode, IdleTimerInterface, PwmConfig, PwmInterface, TimerInterface,
};
