//! Encoder power gate library.
//!
//! Removes the pull-ups from rotary encoder inputs while the keyboard is
//! idle or asleep and restores them when it becomes active again.  The gate
//! itself lives in [`app::gate`]; hardware is reached only through the
//! [`app::ports::GpioController`] port.

#![deny(unused_must_use)]

pub mod activity;
pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod gpio;
pub mod pins;
pub mod version;
