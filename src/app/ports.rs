//! Port traits — the boundary between the gate and GPIO hardware.
//!
//! ```text
//!   EncoderPowerGate ──▶ GpioController ──▶ Adapter (HAL / sim / mock)
//! ```
//!
//! Controllers are owned by the board, not by the gate.  The gate only
//! borrows them, so every method takes `&self`; implementations provide
//! their own synchronisation (interior mutability on a single core, or the
//! driver's lock on real hardware).

use crate::error::PinError;
use crate::gpio::GpioFlags;

// ───────────────────────────────────────────────────────────────
// GPIO controller port (driven adapter: domain ↔ hardware)
// ───────────────────────────────────────────────────────────────

/// One GPIO port (a bank of pins behind a single controller).
pub trait GpioController {
    /// Human-readable controller name for logs, e.g. `"gpio0"`.
    fn label(&self) -> &str;

    /// Apply `flags` to `pin`.
    fn configure(&self, pin: u8, flags: GpioFlags) -> Result<(), PinError>;

    /// Sample the logical level of `pin`.  `true` means asserted.
    fn read(&self, pin: u8) -> Result<bool, PinError>;
}
