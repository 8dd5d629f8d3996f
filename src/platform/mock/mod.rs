//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

pub mod gpio;
pub mod pwm;
pub mod timer;

pub use gpio::MockGpio;
pub use pwm::MockPwm;
pub use timer::{MockIdleTimer, MockTimer};
