//! PWM interface trait
//!
//! This module defines the PWM interface used to generate the modulated IR
//! carrier on the transmit pin.

use crate::platform::Result;

/// PWM configuration
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    /// Output frequency in Hz
    pub frequency: u32,
    /// Duty cycle in the range 0.0..=1.0
    pub duty_cycle: f32,
}

impl Default for PwmConfig {
    fn default() -> Self {
        // 38 kHz carrier, output off
        Self {
            frequency: 38_000,
            duty_cycle: 0.0,
        }
    }
}

/// PWM interface trait
///
/// Platform implementations must provide this interface for PWM control.
/// A mark is carrier at ~50% duty; a space is duty 0 (output off).
pub trait PwmInterface {
    /// Set the duty cycle
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidDutyCycle)` if the value
    /// is outside 0.0..=1.0.
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    /// Get the current duty cycle
    fn duty_cycle(&self) -> f32;

    /// Set the output frequency in Hz
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidFrequency)` if the
    /// frequency is zero or cannot be generated.
    fn set_frequency(&mut self, frequency: u32) -> Result<()>;

    /// Get the current output frequency in Hz
    fn frequency(&self) -> u32;

    /// Enable the PWM output
    fn enable(&mut self);

    /// Disable the PWM output
    fn disable(&mut self);

    /// Return true if the PWM output is enabled
    fn is_enabled(&self) -> bool;
}
