//! RP2350 GPIO implementation
//!
//! This module provides GPIO support for RP2350 using the `rp235x-hal` crate.

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
};
use rp235x_hal::gpio::{FunctionSioInput, Interrupt, Pin, PinId, PullType};

/// RP2350 IR receive pin
///
/// Wraps an `rp235x-hal` SIO input pin to implement the `GpioInterface`
/// trait. Edge events map onto the pad's edge-detect unit: both `EdgeLow`
/// and `EdgeHigh` interrupts are raised so the capture handler sees every
/// transition. The firmware's `IO_IRQ_BANK0` handler must call
/// [`clear_interrupt`](Rp2350IrPin::clear_interrupt) before invoking
/// `IrReceiver::on_edge`.
pub struct Rp2350IrPin<I: PinId, P: PullType> {
    pin: Pin<I, FunctionSioInput, P>,
    mode: GpioMode,
}

impl<I: PinId, P: PullType> Rp2350IrPin<I, P> {
    /// Create a new receive pin wrapper
    pub fn new(pin: Pin<I, FunctionSioInput, P>) -> Self {
        Self {
            pin,
            mode: GpioMode::Input,
        }
    }

    /// Acknowledge a pending edge interrupt (call from the IRQ handler)
    pub fn clear_interrupt(&mut self) {
        self.pin.clear_interrupt(Interrupt::EdgeLow);
        self.pin.clear_interrupt(Interrupt::EdgeHigh);
    }
}

impl<I: PinId, P: PullType> GpioInterface for Rp2350IrPin<I, P> {
    fn set_high(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn set_low(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn read(&self) -> bool {
        use embedded_hal::digital::v2::InputPin;
        self.pin.is_high().unwrap_or(false)
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        // Runtime mode changes require pin reconfiguration; the pin arrives
        // already configured as an input, so only record the request.
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }

    fn enable_edge_events(&mut self) {
        self.pin.set_interrupt_enabled(Interrupt::EdgeLow, true);
        self.pin.set_interrupt_enabled(Interrupt::EdgeHigh, true);
    }

    fn disable_edge_events(&mut self) {
        self.pin.set_interrupt_enabled(Interrupt::EdgeLow, false);
        self.pin.set_interrupt_enabled(Interrupt::EdgeHigh, false);
    }
}
