//! Encoder pin assignments for the main board.
//!
//! Single source of truth: the gate and the simulator both build their pin
//! tables from [`ENCODER_PINS`].  Order matters, pins are reconfigured in
//! the order listed here.

/// GPIO port a pin lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Gpio0,
    Gpio1,
}

/// One encoder line: its port and pin index on that port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinAssignment {
    pub port: Port,
    pub pin: u8,
}

// ---------------------------------------------------------------------------
// EC11 rotary encoders
// ---------------------------------------------------------------------------

/// Encoder A, phase input.
pub const ENCODER_A: PinAssignment = PinAssignment { port: Port::Gpio1, pin: 0 };
/// Encoder B, phase input.
pub const ENCODER_B: PinAssignment = PinAssignment { port: Port::Gpio0, pin: 22 };

/// Every encoder line managed by the power gate, in reconfiguration order.
pub const ENCODER_PINS: [PinAssignment; 2] = [ENCODER_A, ENCODER_B];
