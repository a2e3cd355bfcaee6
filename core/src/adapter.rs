// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Per-platform wireless adapter strategies.
//!
//! Exactly one [`WifiAdapter`] variant is active per process, selected once
//! at startup via [`Platform::detect`]. Every variant expresses its platform
//! vocabulary in the shared [`WifiState`] model, so orchestration code never
//! branches on the operating system.
//!
//! Mutating operations (power toggles, join) serialize per interface through
//! [`interface_guard`]; the OS utilities garble their output when two of
//! them touch the same radio at once. Cross-process exclusion is out of
//! scope, one CLI invocation per host is the assumed deployment.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use aerial_common::models::link::ConnectionInfo;
use aerial_common::models::network::NetworkRecord;
use aerial_common::models::state::WifiState;
use thiserror::Error;

use crate::executor::ShellRunner;

mod linux;
mod macos;
mod windows;

pub use linux::LinuxAdapter;
pub use macos::MacAdapter;
pub use windows::WindowsAdapter;

/// The platform families an adapter variant exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS and anything else that ships the airport utility.
    MacLike,
    /// Linux with NetworkManager.
    Linux,
    /// Windows with netsh.
    Windows,
}

impl Platform {
    /// Detects the platform family of the running host.
    ///
    /// Unrecognized systems fall back to [`MacLike`], whose utilities fail
    /// loudly and carry the attempted command in the error.
    ///
    /// [`MacLike`]: Platform::MacLike
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::MacLike,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacLike => "macos-like",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        };
        write!(f, "{name}")
    }
}

/// Failures an adapter operation can surface.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The platform utility could not be spawned or exited non-zero.
    #[error("command `{command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },

    /// The active platform variant has no implementation for the operation.
    #[error("operation `{operation}` is not supported on {platform}")]
    Unsupported {
        operation: &'static str,
        platform: Platform,
    },
}

/// Defines the uniform contract every platform variant implements.
///
/// Operations return [`WifiState`] values or typed records, never raw
/// platform text. A variant that cannot perform an operation reports
/// [`AdapterError::Unsupported`] instead of pretending it worked.
pub trait WifiAdapter: Send + Sync {
    /// The platform family this variant drives.
    fn platform(&self) -> Platform;

    /// Resolves and caches the wireless interface identifier.
    ///
    /// Re-resolution is idempotent; an empty result is never cached so a
    /// later call can try again.
    fn interface_name(&self) -> Result<String, AdapterError>;

    /// Queries the current link snapshot. Never cached, the radio state can
    /// change between any two calls.
    fn current_connection(&self) -> Result<ConnectionInfo, AdapterError>;

    /// Lists nearby networks. Side-effect free, but may take seconds.
    fn scan(&self) -> Result<Vec<NetworkRecord>, AdapterError>;

    /// Projection of [`scan`] onto SSIDs, preserving duplicates and order.
    ///
    /// [`scan`]: WifiAdapter::scan
    fn all_ssids(&self) -> Result<Vec<String>, AdapterError> {
        Ok(self.scan()?.into_iter().map(|record| record.ssid).collect())
    }

    /// Reports radio power as [`WifiState::On`] or [`WifiState::Off`].
    ///
    /// Anything the platform prints that is not its affirmative token maps
    /// to `Off`, the fail-safe reading.
    fn power_state(&self) -> Result<WifiState, AdapterError>;

    /// Powers the radio on. True only if a follow-up state query confirms
    /// it; command failures degrade to false.
    fn power_on(&self) -> Result<bool, AdapterError>;

    /// Powers the radio off. Same confirmation and degradation rules as
    /// [`power_on`].
    ///
    /// [`power_on`]: WifiAdapter::power_on
    fn power_off(&self) -> Result<bool, AdapterError>;

    /// Joins `ssid` with `password` and verifies the result.
    ///
    /// Returns [`WifiState::Connected`] only when the link reports running
    /// **and** the associated SSID equals the requested one. A different
    /// network being up must not count as success.
    fn join(&self, ssid: &str, password: &str) -> Result<WifiState, AdapterError>;

    /// Drops the current association by powering the radio off.
    ///
    /// `Some(Disconnected)` when the power-off was confirmed, `None` when
    /// it was not and the link state should not be trusted.
    fn leave(&self) -> Result<Option<WifiState>, AdapterError>;
}

/// Builds the adapter variant for `platform`, wired to the real shell.
pub fn create_adapter(platform: Platform) -> Box<dyn WifiAdapter> {
    match platform {
        Platform::MacLike => Box::new(MacAdapter::new(Box::new(ShellRunner))),
        Platform::Linux => Box::new(LinuxAdapter::new(Box::new(ShellRunner))),
        Platform::Windows => Box::new(WindowsAdapter::new(Box::new(ShellRunner))),
    }
}

static INTERFACE_LOCKS: OnceLock<Mutex<HashMap<String, Arc<Mutex<()>>>>> = OnceLock::new();

/// Returns the process-local mutex guarding `interface`.
///
/// Holders of the inner lock are the only ones allowed to issue a mutating
/// command against that interface.
pub(crate) fn interface_guard(interface: &str) -> Arc<Mutex<()>> {
    let registry = INTERFACE_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = registry
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    map.entry(interface.to_string())
        .or_insert_with(|| Arc::new(Mutex::new(())))
        .clone()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    struct StubAdapter;

    impl WifiAdapter for StubAdapter {
        fn platform(&self) -> Platform {
            Platform::MacLike
        }

        fn interface_name(&self) -> Result<String, AdapterError> {
            Ok("en0".to_string())
        }

        fn current_connection(&self) -> Result<ConnectionInfo, AdapterError> {
            Ok(ConnectionInfo::default())
        }

        fn scan(&self) -> Result<Vec<NetworkRecord>, AdapterError> {
            let record = |ssid: &str| NetworkRecord {
                ssid: ssid.to_string(),
                signal: "-60".to_string(),
                channel: "6".to_string(),
                ht: "Y".to_string(),
                security: String::new(),
            };
            Ok(vec![record("X"), record("Y"), record("X")])
        }

        fn power_state(&self) -> Result<WifiState, AdapterError> {
            Ok(WifiState::On)
        }

        fn power_on(&self) -> Result<bool, AdapterError> {
            Ok(true)
        }

        fn power_off(&self) -> Result<bool, AdapterError> {
            Ok(true)
        }

        fn join(&self, _ssid: &str, _password: &str) -> Result<WifiState, AdapterError> {
            Ok(WifiState::Connected)
        }

        fn leave(&self) -> Result<Option<WifiState>, AdapterError> {
            Ok(Some(WifiState::Disconnected))
        }
    }

    #[test]
    fn detect_matches_the_build_target() {
        let platform: Platform = Platform::detect();
        if cfg!(target_os = "linux") {
            assert_eq!(platform, Platform::Linux);
        } else if cfg!(target_os = "windows") {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_eq!(platform, Platform::MacLike);
        }
    }

    #[test]
    fn platform_displays_lowercase_names() {
        assert_eq!(Platform::Linux.to_string(), "linux");
        assert_eq!(Platform::Windows.to_string(), "windows");
        assert_eq!(Platform::MacLike.to_string(), "macos-like");
    }

    #[test]
    fn unsupported_error_names_operation_and_platform() {
        let err = AdapterError::Unsupported {
            operation: "join",
            platform: Platform::Windows,
        };

        assert_eq!(
            err.to_string(),
            "operation `join` is not supported on windows"
        );
    }

    #[test]
    fn command_error_carries_the_command_text() {
        let err = AdapterError::CommandFailed {
            command: "nmcli radio wifi on".to_string(),
            detail: "exit status 4".to_string(),
        };

        assert!(err.to_string().contains("nmcli radio wifi on"));
    }

    #[test]
    fn default_all_ssids_preserves_duplicates_and_order() {
        let adapter = StubAdapter;
        let ssids = adapter.all_ssids().expect("stub scan cannot fail");

        assert_eq!(ssids, vec!["X", "Y", "X"]);
    }

    #[test]
    fn guard_is_shared_per_interface_name() {
        let first = interface_guard("test-guard-en0");
        let again = interface_guard("test-guard-en0");
        let other = interface_guard("test-guard-wlan0");

        assert!(Arc::ptr_eq(&first, &again));
        assert!(!Arc::ptr_eq(&first, &other));
    }
}
