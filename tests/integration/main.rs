//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the gate against the
//! recording GPIO mock.  All tests run on the host with no real hardware.

mod dispatch_tests;
mod mock_gpio;
