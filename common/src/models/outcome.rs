// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Connect Verdict
//!
//! This module defines [`ConnectOutcome`], the structured verdict of a
//! scan-then-join attempt.
//!
//! ## Key Concepts
//! * **Numeric Code**: `0` means a working, reachable link. `1` means the
//!   join itself failed. `1000` means the link is up but the probe host did
//!   not answer.
//! * **Degraded Success**: An unreachable network still reports
//!   `CONNECTED`; the association succeeded even though the probe failed.

use crate::models::state::WifiState;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// The join worked and the probe host answered.
pub const CODE_SUCCESS: i32 = 0;
/// The join did not produce a working association.
pub const CODE_JOIN_FAILED: i32 = 1;
/// The join worked but the probe host never answered.
pub const CODE_UNREACHABLE: i32 = 1000;

/// The structured verdict of one connect attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectOutcome {
    /// One of [`CODE_SUCCESS`], [`CODE_JOIN_FAILED`] or [`CODE_UNREACHABLE`].
    pub code: i32,
    /// Human-readable verdict line.
    pub message: String,
    /// The network the attempt targeted.
    pub ssid: String,
    /// Final state of the wireless interface.
    pub state: WifiState,
    /// Round-trip time of the reachability probe, present on success only.
    #[serde(
        serialize_with = "duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub ping_cost: Option<Duration>,
    /// The host that was probed, empty when no probe ran.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
}

impl ConnectOutcome {
    /// Join succeeded and `domain` answered within `elapsed`.
    pub fn success(ssid: &str, domain: &str, elapsed: Duration) -> Self {
        Self {
            code: CODE_SUCCESS,
            message: "Connected successfully.".to_string(),
            ssid: ssid.to_string(),
            state: WifiState::Connected,
            ping_cost: Some(elapsed),
            domain: domain.to_string(),
        }
    }

    /// Join succeeded but `domain` never answered the probe.
    pub fn unreachable(ssid: &str, domain: &str) -> Self {
        Self {
            code: CODE_UNREACHABLE,
            message: "Network is unreachable, please check it first!".to_string(),
            ssid: ssid.to_string(),
            state: WifiState::Connected,
            ping_cost: None,
            domain: domain.to_string(),
        }
    }

    /// Join ran and the link did not come up on the requested network.
    pub fn join_failed(ssid: &str) -> Self {
        Self {
            code: CODE_JOIN_FAILED,
            message: "Password or ssid verification failed.".to_string(),
            ssid: ssid.to_string(),
            state: WifiState::ConnectFailed,
            ping_cost: None,
            domain: String::new(),
        }
    }

    /// The radio was off and could not be powered on, so no join ran.
    pub fn radio_failed(ssid: &str) -> Self {
        Self {
            code: CODE_JOIN_FAILED,
            message: "Wireless interface could not be enabled.".to_string(),
            ssid: ssid.to_string(),
            state: WifiState::ConnectFailed,
            ping_cost: None,
            domain: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}

fn duration_secs<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(duration) => serializer.serialize_f64(duration.as_secs_f64()),
        None => serializer.serialize_none(),
    }
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
    use super::{CODE_JOIN_FAILED, CODE_SUCCESS, CODE_UNREACHABLE, ConnectOutcome};
    use crate::models::state::WifiState;
    use std::time::Duration;

    #[test]
    fn success_carries_probe_cost() {
        let outcome: ConnectOutcome =
            ConnectOutcome::success("lab", "jd.com", Duration::from_millis(42));

        assert_eq!(outcome.code, CODE_SUCCESS);
        assert!(outcome.is_success());
        assert_eq!(outcome.state, WifiState::Connected);
        assert_eq!(outcome.ping_cost, Some(Duration::from_millis(42)));
        assert_eq!(outcome.domain, "jd.com");
        assert_eq!(outcome.message, "Connected successfully.");
    }

    #[test]
    fn unreachable_is_still_connected() {
        let outcome: ConnectOutcome = ConnectOutcome::unreachable("lab", "jd.com");

        assert_eq!(outcome.code, CODE_UNREACHABLE);
        assert!(!outcome.is_success());
        assert_eq!(outcome.state, WifiState::Connected);
        assert_eq!(outcome.ping_cost, None);
    }

    #[test]
    fn join_failure_has_no_probe_data() {
        let outcome: ConnectOutcome = ConnectOutcome::join_failed("lab");

        assert_eq!(outcome.code, CODE_JOIN_FAILED);
        assert_eq!(outcome.state, WifiState::ConnectFailed);
        assert_eq!(outcome.ping_cost, None);
        assert!(outcome.domain.is_empty());
    }

    #[test]
    fn radio_failure_reports_connect_failed() {
        let outcome: ConnectOutcome = ConnectOutcome::radio_failed("lab");

        assert_eq!(outcome.code, CODE_JOIN_FAILED);
        assert_eq!(outcome.state, WifiState::ConnectFailed);
        assert!(outcome.message.contains("could not be enabled"));
    }
}
