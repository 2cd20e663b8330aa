//! Hardware adapter — bridges `embedded-hal` pins to [`GpioController`].
//!
//! `embedded-hal` 1.0 has no trait for changing a pin's pull at run time,
//! so the board crate supplies [`PullSwitch`] for its pin type (usually a
//! thin wrapper over the chip HAL's flex/input pin).  Everything else is
//! the standard [`InputPin`] trait.

use core::cell::RefCell;

use embedded_hal::digital::{Error as _, ErrorType, InputPin};

use crate::app::ports::GpioController;
use crate::error::PinError;
use crate::gpio::{GpioFlags, PullConfig};

/// Run-time pull reconfiguration for a HAL input pin.
pub trait PullSwitch: ErrorType {
    fn set_pull(&mut self, pull: PullConfig) -> Result<(), Self::Error>;
}

/// A GPIO port made of `N` HAL pins, indexed by position.
pub struct HalController<P, const N: usize> {
    label: &'static str,
    pins: RefCell<[P; N]>,
}

impl<P: ErrorType, const N: usize> HalController<P, N> {
    pub fn new(label: &'static str, pins: [P; N]) -> Self {
        Self {
            label,
            pins: RefCell::new(pins),
        }
    }

    /// Give the pins back to the caller.
    pub fn release(self) -> [P; N] {
        self.pins.into_inner()
    }

    fn with_pin<T>(
        &self,
        pin: u8,
        f: impl FnOnce(&mut P) -> Result<T, P::Error>,
    ) -> Result<T, PinError> {
        let mut pins = self.pins.try_borrow_mut().map_err(|_| PinError::Busy)?;
        let hal_pin = pins.get_mut(pin as usize).ok_or(PinError::InvalidPin(pin))?;
        f(hal_pin).map_err(|e| PinError::Hal(e.kind()))
    }
}

impl<P: InputPin + PullSwitch, const N: usize> GpioController for HalController<P, N> {
    fn label(&self) -> &str {
        self.label
    }

    fn configure(&self, pin: u8, flags: GpioFlags) -> Result<(), PinError> {
        // Only active-high inputs are expressible through PullSwitch.
        let pull = PullConfig::from_flags(flags).ok_or(PinError::UnsupportedFlags(flags.bits()))?;
        self.with_pin(pin, |p| p.set_pull(pull))
    }

    fn read(&self, pin: u8) -> Result<bool, PinError> {
        self.with_pin(pin, |p| p.is_high())
    }
}
