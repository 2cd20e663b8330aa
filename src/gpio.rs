//! GPIO mode flags and the two pull configurations an encoder line can be in.

use core::fmt;
use core::ops::BitOr;

/// Pin mode bitset passed to [`GpioController::configure`].
///
/// Bit positions follow the common RTOS GPIO flag layout so that a controller
/// backed by a C driver can forward [`GpioFlags::bits`] unchanged.
///
/// [`GpioController::configure`]: crate::app::ports::GpioController::configure
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GpioFlags(u32);

impl GpioFlags {
    /// Active-high polarity (the absence of [`GpioFlags::ACTIVE_LOW`]).
    pub const ACTIVE_HIGH: Self = Self(0);
    pub const ACTIVE_LOW: Self = Self(1 << 0);
    pub const PULL_UP: Self = Self(1 << 4);
    pub const INPUT: Self = Self(1 << 16);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_input(self) -> bool {
        self.contains(Self::INPUT)
    }

    pub const fn has_pull_up(self) -> bool {
        self.contains(Self::PULL_UP)
    }

    pub const fn is_active_low(self) -> bool {
        self.contains(Self::ACTIVE_LOW)
    }
}

impl BitOr for GpioFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for GpioFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GpioFlags(0x{:08x}", self.0)?;
        if self.is_input() {
            write!(f, " INPUT")?;
        }
        if self.is_active_low() {
            write!(f, " ACTIVE_LOW")?;
        }
        if self.has_pull_up() {
            write!(f, " PULL_UP")?;
        }
        write!(f, ")")
    }
}

/// Electrical termination of an encoder input.
///
/// Both variants keep the pin an active-high input; they differ only in
/// whether the internal pull-up is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullConfig {
    /// Pull-up connected: the encoder is armed and idles high.
    PullUpEnabled,
    /// Pull-up removed: no quiescent current, the line floats unless driven.
    PullUpDisabled,
}

impl PullConfig {
    pub const fn flags(self) -> GpioFlags {
        match self {
            Self::PullUpEnabled => GpioFlags::INPUT
                .union(GpioFlags::ACTIVE_HIGH)
                .union(GpioFlags::PULL_UP),
            Self::PullUpDisabled => GpioFlags::INPUT.union(GpioFlags::ACTIVE_HIGH),
        }
    }

    /// Recover the pull configuration from a flag set written to a pin.
    /// Returns `None` for anything that is not an active-high input.
    pub const fn from_flags(flags: GpioFlags) -> Option<Self> {
        if !flags.is_input() || flags.is_active_low() {
            return None;
        }
        if flags.has_pull_up() {
            Some(Self::PullUpEnabled)
        } else {
            Some(Self::PullUpDisabled)
        }
    }
}
