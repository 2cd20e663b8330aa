//! Firmware version metadata, stamped at build time by `build.rs`.

use core::fmt;

use serde::Serialize;

/// Where the firmware was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    pub branch: &'static str,
    pub hash: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FirmwareVersion {
    /// Crate version, e.g. `"0.1.0"`.
    pub version: &'static str,
    pub repo: RepoInfo,
}

/// Version of the running firmware.  Branch and hash read `"unknown"` when
/// the build had no git checkout.
pub const fn firmware_version() -> FirmwareVersion {
    FirmwareVersion {
        version: env!("CARGO_PKG_VERSION"),
        repo: RepoInfo {
            branch: env!("ENCODER_GATE_GIT_BRANCH"),
            hash: env!("ENCODER_GATE_GIT_HASH"),
        },
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}@{})", self.version, self.repo.branch, self.repo.hash)
    }
}
