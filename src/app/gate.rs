//! Encoder power gate — pull-up gating driven by activity state.
//!
//! EC11 encoders idle with both phase lines pulled high, so every detent
//! position that leaves a contact closed burns current through the pull-up.
//! [`EncoderPowerGate`] removes the pull-ups when the keyboard goes idle or
//! to sleep and restores them before input handling resumes.
//!
//! ```text
//!  ActivityStateChanged ──▶ ┌──────────────────┐ ──▶ gpio1.configure(0, ..)
//!                           │ EncoderPowerGate │ ──▶ gpio0.configure(22, ..)
//!                           └──────────────────┘
//! ```
//!
//! ## Read-before-disable
//!
//! A pin that currently reads asserted is mid-transition.  Dropping its
//! pull-up would let the line float and the encoder driver could decode a
//! phantom step, so such a pin is left alone.  There is no deferred retry:
//! the pull-up stays on until the next transition that reaches the gate.

use core::fmt;

use heapless::Vec;
use log::{debug, warn};

use crate::activity::ActivityState;
use crate::config::GateConfig;
use crate::error::{Error, Result, Unsupported};
use crate::events::{Event, EventKind, Listener};
use crate::gpio::PullConfig;
use crate::pins::{ENCODER_PINS, Port};

use super::ports::GpioController;

/// Capacity of the pin table.
pub const MAX_ENCODER_PINS: usize = 4;

const ACTIVITY_EVENTS: &[EventKind] = &[EventKind::ActivityStateChanged];

// ───────────────────────────────────────────────────────────────
// EncoderPin
// ───────────────────────────────────────────────────────────────

/// One encoder input line on a borrowed controller.
pub struct EncoderPin<'a, C: GpioController + ?Sized> {
    controller: &'a C,
    pin: u8,
    pull: PullConfig,
}

impl<'a, C: GpioController + ?Sized> EncoderPin<'a, C> {
    /// Encoder pins come up armed, so the initial pull is `PullUpEnabled`.
    pub fn new(controller: &'a C, pin: u8) -> Self {
        Self {
            controller,
            pin,
            pull: PullConfig::PullUpEnabled,
        }
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Last pull configuration successfully written to the controller.
    pub fn pull(&self) -> PullConfig {
        self.pull
    }

    fn apply(&mut self, pull: PullConfig) -> Result<()> {
        self.controller
            .configure(self.pin, pull.flags())
            .map_err(|source| Unsupported::Pin { pin: self.pin, source })?;
        self.pull = pull;
        Ok(())
    }

    /// Single-sample guard: `true` only when the pin reads de-asserted.
    /// A failed read counts as asserted.
    fn is_released(&self) -> bool {
        match self.controller.read(self.pin) {
            Ok(asserted) => !asserted,
            Err(e) => {
                debug!(
                    "{} pin {}: read failed ({}), keeping pull-up",
                    self.controller.label(),
                    self.pin,
                    e
                );
                false
            }
        }
    }
}

impl<C: GpioController + ?Sized> fmt::Debug for EncoderPin<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderPin")
            .field("controller", &self.controller.label())
            .field("pin", &self.pin)
            .field("pull", &self.pull)
            .finish()
    }
}

// ───────────────────────────────────────────────────────────────
// EncoderPowerGate
// ───────────────────────────────────────────────────────────────

/// Reacts to activity-state notifications by toggling encoder pull-ups.
///
/// Holds no memory of the previous state: every call is decided from the
/// notification payload and the pins' current levels alone.
pub struct EncoderPowerGate<'a, C: GpioController + ?Sized> {
    config: GateConfig,
    pins: Vec<EncoderPin<'a, C>, MAX_ENCODER_PINS>,
}

impl<'a, C: GpioController + ?Sized> EncoderPowerGate<'a, C> {
    /// An empty gate.  Add pins with [`add_pin`](Self::add_pin).
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            pins: Vec::new(),
        }
    }

    /// Gate every pin in [`ENCODER_PINS`], resolving each port to the
    /// matching controller.
    pub fn for_board(config: GateConfig, gpio0: &'a C, gpio1: &'a C) -> Result<Self> {
        let mut gate = Self::new(config);
        for assignment in ENCODER_PINS {
            let controller = match assignment.port {
                Port::Gpio0 => gpio0,
                Port::Gpio1 => gpio1,
            };
            gate.add_pin(controller, assignment.pin)?;
        }
        Ok(gate)
    }

    /// Manage another pin.  Pins are reconfigured in the order added.
    pub fn add_pin(&mut self, controller: &'a C, pin: u8) -> Result<()> {
        self.pins
            .push(EncoderPin::new(controller, pin))
            .map_err(|_| Error::Config("encoder pin table full"))
    }

    pub fn config(&self) -> GateConfig {
        self.config
    }

    pub fn pins(&self) -> &[EncoderPin<'a, C>] {
        &self.pins
    }

    /// Both gating options are off: the gate does not subscribe and
    /// refuses every activity state without touching a pin.
    pub fn is_inert(&self) -> bool {
        self.config.is_inert()
    }

    // ── Event handling ────────────────────────────────────────

    /// Apply the pull configuration the notified activity state calls for.
    ///
    /// A configure failure aborts the remaining pins; whatever was already
    /// reconfigured stays that way.  An inert gate returns
    /// `InvalidArgument` for every activity state and issues no GPIO calls.
    pub fn handle(&mut self, event: &Event) -> Result<()> {
        let Some(ev) = event.as_activity_state_changed() else {
            return Err(Unsupported::Event(event.kind()).into());
        };

        match ev.activity() {
            Ok(_) if self.is_inert() => {
                warn!("Gating disabled, ignoring activity state {}", ev.state);
                Err(Error::InvalidArgument { state: ev.state })
            }
            Ok(ActivityState::Active) => {
                debug!("Entering active mode. Re-enabling encoders.");
                self.enable_all()
            }
            Ok(state) if self.config.disables_on(state) => {
                debug!("Disabling encoders ({:?}).", state);
                self.disable_released()
            }
            // Idle without idle gating is ignored rather than refused.
            Ok(ActivityState::Idle) if self.config.sleep_triggers_gate => Ok(()),
            _ => {
                warn!("Unhandled activity state: {}", ev.state);
                Err(Error::InvalidArgument { state: ev.state })
            }
        }
    }

    /// [`handle`](Self::handle) reduced to a status code: `0` on success,
    /// a negative errno otherwise.
    pub fn handle_status(&mut self, event: &Event) -> i32 {
        match self.handle(event) {
            Ok(()) => 0,
            Err(e) => e.status_code(),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Unconditional, so a pin skipped by the read guard is re-armed too.
    fn enable_all(&mut self) -> Result<()> {
        for pin in &mut self.pins {
            pin.apply(PullConfig::PullUpEnabled)?;
        }
        Ok(())
    }

    fn disable_released(&mut self) -> Result<()> {
        for pin in &mut self.pins {
            if pin.is_released() {
                pin.apply(PullConfig::PullUpDisabled)?;
            } else {
                debug!(
                    "{} pin {} asserted, leaving pull-up on",
                    pin.controller.label(),
                    pin.pin
                );
            }
        }
        Ok(())
    }
}

impl<C: GpioController + ?Sized> Listener for EncoderPowerGate<'_, C> {
    fn name(&self) -> &'static str {
        "encoder_sleep"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        if self.is_inert() { &[] } else { ACTIVITY_EVENTS }
    }

    fn on_event(&mut self, event: &Event) -> Result<()> {
        self.handle(event)
    }
}
