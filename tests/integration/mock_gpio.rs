//! Mock GPIO controller for integration tests.
//!
//! Records every configure/read call so tests can assert on the exact
//! hardware traffic, and lets a test drive pin levels or inject failures.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use embedded_hal::digital::ErrorKind;
use encoder_gate::app::ports::GpioController;
use encoder_gate::error::PinError;
use encoder_gate::gpio::{GpioFlags, PullConfig};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioCall {
    Configure { pin: u8, flags: GpioFlags },
    Read { pin: u8 },
}

// ── MockGpio ──────────────────────────────────────────────────

pub struct MockGpio {
    label: &'static str,
    calls: RefCell<Vec<GpioCall>>,
    levels: RefCell<HashMap<u8, bool>>,
    flags: RefCell<HashMap<u8, GpioFlags>>,
    failing_configure: RefCell<HashSet<u8>>,
    failing_read: RefCell<HashSet<u8>>,
}

#[allow(dead_code)]
impl MockGpio {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            calls: RefCell::new(Vec::new()),
            levels: RefCell::new(HashMap::new()),
            flags: RefCell::new(HashMap::new()),
            failing_configure: RefCell::new(HashSet::new()),
            failing_read: RefCell::new(HashSet::new()),
        }
    }

    /// Drive `pin` asserted (`true`) or de-asserted.
    pub fn set_level(&self, pin: u8, asserted: bool) {
        self.levels.borrow_mut().insert(pin, asserted);
    }

    pub fn fail_configure(&self, pin: u8) {
        self.failing_configure.borrow_mut().insert(pin);
    }

    pub fn fail_read(&self, pin: u8) {
        self.failing_read.borrow_mut().insert(pin);
    }

    pub fn calls(&self) -> Vec<GpioCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn reads_of(&self, pin: u8) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == GpioCall::Read { pin })
            .count()
    }

    pub fn configures_of(&self, pin: u8) -> Vec<GpioFlags> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                GpioCall::Configure { pin: p, flags } if *p == pin => Some(*flags),
                _ => None,
            })
            .collect()
    }

    /// Pull configuration last written successfully to `pin`.
    pub fn pull(&self, pin: u8) -> Option<PullConfig> {
        self.flags.borrow().get(&pin).copied().and_then(PullConfig::from_flags)
    }
}

impl GpioController for MockGpio {
    fn label(&self) -> &str {
        self.label
    }

    fn configure(&self, pin: u8, flags: GpioFlags) -> Result<(), PinError> {
        self.calls.borrow_mut().push(GpioCall::Configure { pin, flags });
        if self.failing_configure.borrow().contains(&pin) {
            return Err(PinError::NotReady);
        }
        self.flags.borrow_mut().insert(pin, flags);
        Ok(())
    }

    fn read(&self, pin: u8) -> Result<bool, PinError> {
        self.calls.borrow_mut().push(GpioCall::Read { pin });
        if self.failing_read.borrow().contains(&pin) {
            return Err(PinError::Hal(ErrorKind::Other));
        }
        Ok(self.levels.borrow().get(&pin).copied().unwrap_or(false))
    }
}
