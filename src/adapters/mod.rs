//! Adapters — concrete implementations of the [`GpioController`] port.
//!
//! | Adapter | Implements       | Connects to                         |
//! |---------|------------------|-------------------------------------|
//! | `hal`   | GpioController   | `embedded-hal` input pins + pull    |
//! | `sim`   | GpioController   | In-memory port for host simulation  |
//!
//! [`GpioController`]: crate::app::ports::GpioController

pub mod hal;
pub mod sim;
