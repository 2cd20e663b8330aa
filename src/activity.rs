//! Device activity states, as broadcast by the power-management tracker.
//!
//! The tracker publishes the state as a raw byte so that listeners built
//! against an older state table still receive the notification.  Decoding
//! into [`ActivityState`] is the listener's job.

/// Coarse lifecycle phase of the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActivityState {
    /// Keys or encoders were used recently.
    Active = 0,
    /// No input for the idle timeout.
    Idle = 1,
    /// No input for the sleep timeout; the device is about to power down.
    Asleep = 2,
}

impl TryFrom<u8> for ActivityState {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Active),
            1 => Ok(Self::Idle),
            2 => Ok(Self::Asleep),
            other => Err(other),
        }
    }
}

/// Payload of an "activity state changed" notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityStateChanged {
    /// Raw state value as published by the tracker.
    pub state: u8,
}

impl ActivityStateChanged {
    pub const fn new(state: ActivityState) -> Self {
        Self { state: state as u8 }
    }

    /// Decode the carried state.  Unknown values are returned as-is.
    pub fn activity(&self) -> Result<ActivityState, u8> {
        ActivityState::try_from(self.state)
    }
}

impl From<ActivityState> for ActivityStateChanged {
    fn from(state: ActivityState) -> Self {
        Self::new(state)
    }
}
