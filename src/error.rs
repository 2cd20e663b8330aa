//! Error types for the encoder power gate.
//!
//! The listener contract of the event substrate is a signed status code, so
//! every variant maps onto one via [`Error::status_code`].  Inside the crate
//! errors stay typed and `Copy`, letting callers and tests tell a mis-routed
//! notification apart from an unhandled activity state.

use core::fmt;

use embedded_hal::digital::ErrorKind;

use crate::events::EventKind;

/// "Not supported" errno value.
pub const ENOTSUP: i32 = 134;
/// "Invalid argument" errno value.
pub const EINVAL: i32 = 22;
/// "Out of memory" errno value.
pub const ENOMEM: i32 = 12;

// ---------------------------------------------------------------------------
// Top-level gate error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The notification was not an activity-state change, or a pin could
    /// not be reconfigured.
    Unsupported(Unsupported),
    /// The notification carried an activity state this gate does not handle.
    InvalidArgument { state: u8 },
    /// A fixed-capacity table is full or the gate was mis-assembled.
    Config(&'static str),
}

impl Error {
    /// Negative status code handed back to the event substrate.
    pub const fn status_code(&self) -> i32 {
        match self {
            Self::Unsupported(_) => -ENOTSUP,
            Self::InvalidArgument { .. } => -EINVAL,
            Self::Config(_) => -ENOMEM,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(e) => write!(f, "unsupported: {e}"),
            Self::InvalidArgument { state } => write!(f, "unhandled activity state: {state}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<Unsupported> for Error {
    fn from(e: Unsupported) -> Self {
        Self::Unsupported(e)
    }
}

// ---------------------------------------------------------------------------
// Unsupported causes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// An event of the wrong kind was delivered to the gate.
    Event(EventKind),
    /// Reconfiguring `pin` failed; later pins were not attempted.
    Pin { pin: u8, source: PinError },
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(kind) => write!(f, "not an activity event ({kind:?})"),
            Self::Pin { pin, source } => write!(f, "pin {pin} configure failed: {source}"),
        }
    }
}

impl core::error::Error for Unsupported {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

/// Failures reported by a [`GpioController`](crate::app::ports::GpioController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// The controller has no pin with this index.
    InvalidPin(u8),
    /// The pin or its controller has not been initialised.
    NotReady,
    /// The controller is already being accessed.
    Busy,
    /// The requested mode flags are not supported by this controller.
    UnsupportedFlags(u32),
    /// The underlying HAL pin reported an error.
    Hal(ErrorKind),
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(pin) => write!(f, "invalid pin {pin}"),
            Self::NotReady => write!(f, "controller not ready"),
            Self::Busy => write!(f, "controller busy"),
            Self::UnsupportedFlags(bits) => write!(f, "unsupported flags 0x{bits:08x}"),
            Self::Hal(kind) => write!(f, "HAL error: {kind}"),
        }
    }
}

impl core::error::Error for PinError {}

impl embedded_hal::digital::Error for PinError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Hal(kind) => *kind,
            _ => ErrorKind::Other,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
