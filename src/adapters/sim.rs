//! Simulated GPIO port for host runs.
//!
//! Stores the last flags written to each pin and an externally driven input
//! level, standing in for a real controller when the firmware logic runs on
//! x86_64.  Nothing here touches hardware.

use core::cell::Cell;

use crate::app::ports::GpioController;
use crate::error::PinError;
use crate::gpio::{GpioFlags, PullConfig};

/// Pins per simulated port.
pub const SIM_PIN_COUNT: usize = 32;

#[derive(Debug, Clone, Copy, Default)]
struct SimPin {
    /// `None` until the first configure.
    flags: Option<GpioFlags>,
    /// Physical level driven onto the pin.
    level: bool,
}

pub struct SimController {
    label: &'static str,
    pins: [Cell<SimPin>; SIM_PIN_COUNT],
}

impl SimController {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            pins: core::array::from_fn(|_| Cell::new(SimPin::default())),
        }
    }

    /// Drive the physical level of `pin` (e.g. an encoder contact closing).
    pub fn set_level(&self, pin: u8, level: bool) -> Result<(), PinError> {
        let cell = self.cell(pin)?;
        cell.set(SimPin { level, ..cell.get() });
        Ok(())
    }

    /// Flags last written to `pin`, if any.
    pub fn flags(&self, pin: u8) -> Option<GpioFlags> {
        self.cell(pin).ok().and_then(|c| c.get().flags)
    }

    /// Pull configuration currently applied to `pin`, if it is an input.
    pub fn pull(&self, pin: u8) -> Option<PullConfig> {
        self.flags(pin).and_then(PullConfig::from_flags)
    }

    fn cell(&self, pin: u8) -> Result<&Cell<SimPin>, PinError> {
        self.pins.get(pin as usize).ok_or(PinError::InvalidPin(pin))
    }
}

impl GpioController for SimController {
    fn label(&self) -> &str {
        self.label
    }

    fn configure(&self, pin: u8, flags: GpioFlags) -> Result<(), PinError> {
        let cell = self.cell(pin)?;
        cell.set(SimPin { flags: Some(flags), ..cell.get() });
        Ok(())
    }

    fn read(&self, pin: u8) -> Result<bool, PinError> {
        let state = self.cell(pin)?.get();
        let flags = state.flags.ok_or(PinError::NotReady)?;
        if !flags.is_input() {
            return Err(PinError::NotReady);
        }
        Ok(state.level != flags.is_active_low())
    }
}
