//! Synchronous event dispatch.
//!
//! Notifications are raised by producers (activity tracker, key scanner,
//! battery monitor) and delivered immediately, on the raising context, to
//! every listener subscribed to that event kind, in registration order.
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ Activity tracker │────▶│              │────▶│ encoder_sleep    │
//! │ Key scanner      │────▶│ EventManager │────▶│ (other listeners)│
//! │ Battery monitor  │────▶│              │     │                  │
//! └──────────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! The first listener that returns an error stops propagation; the error is
//! handed back to the raiser.

use heapless::Vec;
use log::warn;

use crate::activity::ActivityStateChanged;
use crate::error::{Error, Result};

/// Notifications delivered through the [`EventManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The device activity state changed.
    ActivityStateChanged(ActivityStateChanged),
    /// A key switch changed state.
    PositionStateChanged { position: u32, pressed: bool },
    /// Battery state of charge changed.
    BatteryStateChanged { percent: u8 },
}

/// Subscription key: one per [`Event`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ActivityStateChanged,
    PositionStateChanged,
    BatteryStateChanged,
}

impl Event {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::ActivityStateChanged(_) => EventKind::ActivityStateChanged,
            Self::PositionStateChanged { .. } => EventKind::PositionStateChanged,
            Self::BatteryStateChanged { .. } => EventKind::BatteryStateChanged,
        }
    }

    /// Interpret this event as an activity-state change.
    pub fn as_activity_state_changed(&self) -> Option<&ActivityStateChanged> {
        match self {
            Self::ActivityStateChanged(ev) => Some(ev),
            _ => None,
        }
    }
}

impl From<ActivityStateChanged> for Event {
    fn from(ev: ActivityStateChanged) -> Self {
        Self::ActivityStateChanged(ev)
    }
}

// ── Listener ──────────────────────────────────────────────────

/// A component that reacts to events.
pub trait Listener {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Event kinds this listener wants.  An empty slice means the listener
    /// is registered but inert.
    fn subscriptions(&self) -> &'static [EventKind];

    /// Handle one event.  Runs to completion on the raising context.
    fn on_event(&mut self, event: &Event) -> Result<()>;

    fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions().contains(&kind)
    }
}

// ── EventManager ──────────────────────────────────────────────

/// Fixed-capacity, priority-ordered listener table.
pub struct EventManager<'l, const N: usize> {
    listeners: Vec<&'l mut dyn Listener, N>,
}

impl<'l, const N: usize> EventManager<'l, N> {
    pub const fn new() -> Self {
        Self { listeners: Vec::new() }
    }

    /// Append a listener.  Earlier registrations see events first.
    pub fn register(&mut self, listener: &'l mut dyn Listener) -> Result<()> {
        self.listeners
            .push(listener)
            .map_err(|_| Error::Config("listener table full"))
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every subscribed listener.
    pub fn raise(&mut self, event: &Event) -> Result<()> {
        let kind = event.kind();
        for listener in &mut self.listeners {
            if !listener.is_subscribed(kind) {
                continue;
            }
            if let Err(e) = listener.on_event(event) {
                warn!("Listener '{}' failed on {:?}: {}", listener.name(), kind, e);
                return Err(e);
            }
        }
        Ok(())
    }
}

impl<const N: usize> Default for EventManager<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
