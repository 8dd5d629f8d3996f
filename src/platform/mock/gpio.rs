//! Mock GPIO implementation for testing

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
};

/// Mock GPIO implementation
///
/// Tracks pin state (high/low), mode, and edge-event enablement for test
/// verification. The input state can be driven directly to simulate the
/// receiver output.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    edge_events: bool,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            edge_events: false,
        }
    }

    /// Create a new mock GPIO in input mode
    ///
    /// The pin starts high: IR receiver output is active low, so high is idle.
    pub fn new_input() -> Self {
        Self {
            state: true,
            mode: GpioMode::Input,
            edge_events: false,
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }

    /// Return true if edge events are currently enabled
    pub fn edge_events_enabled(&self) -> bool {
        self.edge_events
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull | GpioMode::OutputOpenDrain => {
                self.state = true;
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn set_low(&mut self) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull | GpioMode::OutputOpenDrain => {
                self.state = false;
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }

    fn enable_edge_events(&mut self) {
        self.edge_events = true;
    }

    fn disable_edge_events(&mut self) {
        self.edge_events = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();
        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());

        gpio.set_low().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_input() {
        let mut gpio = MockGpio::new_input();
        assert!(gpio.read());

        // Simulate the receiver pulling the pin low
        gpio.set_input_state(false);
        assert!(!gpio.read());

        // Input mode should not allow set_high/set_low
        assert!(gpio.set_high().is_err());
        assert!(gpio.set_low().is_err());
    }

    #[test]
    fn test_mock_gpio_edge_events() {
        let mut gpio = MockGpio::new_input();
        assert!(!gpio.edge_events_enabled());

        gpio.enable_edge_events();
        assert!(gpio.edge_events_enabled());

        gpio.disable_edge_events();
        assert!(!gpio.edge_events_enabled());
    }

    #[test]
    fn test_mock_gpio_mode() {
        let mut gpio = MockGpio::new_output();
        assert_eq!(gpio.mode(), GpioMode::OutputPushPull);

        gpio.set_mode(GpioMode::Input).unwrap();
        assert_eq!(gpio.mode(), GpioMode::Input);
    }
}
