// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Connection Model
//!
//! This module defines [`ConnectionInfo`], a typed snapshot of the currently
//! associated wireless link as reported by the platform utility.
//!
//! ## Key Concepts
//! * **Typed Fields**: Well-known attributes (SSID, signal, channel, ...) are
//!   promoted to named fields; everything else lands in `extras`.
//! * **Raw Values**: Fields keep the exact text the platform printed. Parsing
//!   numbers out of them is left to whoever renders or scores the link.
//! * **State Normalization**: [`LinkState`] folds the many platform state
//!   tokens into the three cases callers actually branch on.

use serde::Serialize;
use std::collections::BTreeMap;

/// A snapshot of the current wireless association.
///
/// Every field holds the raw value from the platform output. An empty string
/// means the platform did not report that attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConnectionInfo {
    /// Name of the associated network.
    pub ssid: String,
    /// Received signal strength, typically dBm.
    pub signal: String,
    /// Noise floor, typically dBm.
    pub noise: String,
    /// Raw platform state token, see [`ConnectionInfo::link_state`].
    pub state: String,
    /// Operating mode (e.g. station, infra).
    pub mode: String,
    /// Last transmit rate.
    pub tx_rate: String,
    /// Maximum supported rate.
    pub max_rate: String,
    /// 802.11 authentication in use.
    pub auth: String,
    /// Link security / cipher in use.
    pub security: String,
    /// Modulation and coding scheme index.
    pub mcs: String,
    /// Guard interval.
    pub guard_interval: String,
    /// Radio channel.
    pub channel: String,
    /// Number of spatial streams.
    pub nss: String,
    /// Attributes the platform reported that have no named field.
    pub extras: BTreeMap<String, String>,
}

impl ConnectionInfo {
    /// Normalizes the raw `state` token into a [`LinkState`].
    pub fn link_state(&self) -> LinkState {
        LinkState::from_token(&self.state)
    }

    /// Parses the signal reading as a number, if it is one.
    /// Accepts both `-52` style dBm readings and `87%` style percentages.
    pub fn signal_value(&self) -> Option<i32> {
        self.signal.trim().trim_end_matches('%').trim().parse().ok()
    }

    /// Whether the platform reported any association at all.
    pub fn is_associated(&self) -> bool {
        !self.ssid.trim().is_empty()
    }
}

/// The normalized verdict on a raw platform state token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// The platform reports the link as up.
    Running,
    /// The platform reported no state at all.
    Unknown,
    /// The platform reported a state that is not a working link.
    Other,
}

impl LinkState {
    /// Folds a raw state token into the normalized form.
    ///
    /// Platforms disagree wildly here. airport prints `running` while nmcli
    /// prints `100 (connected)` and netsh plain `connected`. Tokens that are
    /// clearly not a working link (`disconnected`, `unavailable`) map to
    /// [`Other`] even though they contain `connected` as a substring, so the
    /// negative checks run first.
    ///
    /// [`Other`]: LinkState::Other
    pub fn from_token(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            return LinkState::Unknown;
        }
        if token.contains("disconnect") || token.contains("unavailable") {
            return LinkState::Other;
        }
        if token == "running" || token.contains("connected") || token.contains("activated") {
            return LinkState::Running;
        }
        LinkState::Other
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
    use super::{ConnectionInfo, LinkState};

    #[test]
    fn airport_running_token_is_running() {
        assert_eq!(LinkState::from_token("running"), LinkState::Running);
        assert_eq!(LinkState::from_token("  Running "), LinkState::Running);
    }

    #[test]
    fn nmcli_connected_token_is_running() {
        assert_eq!(
            LinkState::from_token("100 (connected)"),
            LinkState::Running
        );
        assert_eq!(LinkState::from_token("activated"), LinkState::Running);
    }

    #[test]
    fn netsh_connected_token_is_running() {
        assert_eq!(LinkState::from_token("connected"), LinkState::Running);
    }

    #[test]
    fn disconnected_tokens_are_other_despite_substring() {
        // "disconnected" contains "connected"; the negative check must win.
        assert_eq!(
            LinkState::from_token("30 (disconnected)"),
            LinkState::Other
        );
        assert_eq!(LinkState::from_token("disconnected"), LinkState::Other);
        assert_eq!(
            LinkState::from_token("20 (unavailable)"),
            LinkState::Other
        );
    }

    #[test]
    fn empty_token_is_unknown() {
        assert_eq!(LinkState::from_token(""), LinkState::Unknown);
        assert_eq!(LinkState::from_token("   "), LinkState::Unknown);
    }

    #[test]
    fn unrecognized_token_is_other() {
        assert_eq!(LinkState::from_token("init"), LinkState::Other);
        assert_eq!(LinkState::from_token("scanning"), LinkState::Other);
    }

    #[test]
    fn default_connection_reports_unknown_state() {
        let info: ConnectionInfo = ConnectionInfo::default();
        assert_eq!(info.link_state(), LinkState::Unknown);
        assert!(!info.is_associated());
        assert!(info.extras.is_empty());
    }

    #[test]
    fn signal_value_reads_dbm_and_percent() {
        let mut info: ConnectionInfo = ConnectionInfo::default();
        info.signal = "-52".to_string();
        assert_eq!(info.signal_value(), Some(-52));
        info.signal = "87%".to_string();
        assert_eq!(info.signal_value(), Some(87));
        info.signal = "strong".to_string();
        assert_eq!(info.signal_value(), None);
    }
}
