//! Application core — pure gating logic, zero direct I/O.
//!
//! All interaction with GPIO hardware happens through the port traits in
//! [`ports`], so the gate runs unchanged against real controllers, the host
//! simulator, or a recording mock.

pub mod gate;
pub mod ports;
