// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Wireless Link State
//!
//! This module defines [`WifiState`], the closed set of states a wireless
//! interface can be reported in.
//!
//! ## Key Concepts
//! * **Closed Set**: Every operation that reports a state picks one of these
//!   five variants; callers can match exhaustively.
//! * **Stable Tokens**: The serialized and displayed form is the upper
//!   snake-case variant name, safe to consume from scripts.

use serde::Serialize;
use std::fmt;

/// The observable state of a wireless interface or connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WifiState {
    /// Associated with a network and the link is up.
    Connected,
    /// No association, radio may still be powered.
    Disconnected,
    /// Radio power is on.
    On,
    /// Radio power is off.
    Off,
    /// A join attempt ran and did not produce a working link.
    ConnectFailed,
}

impl WifiState {
    /// Returns the stable textual token for this state.
    pub fn as_token(&self) -> &'static str {
        match self {
            WifiState::Connected => "CONNECTED",
            WifiState::Disconnected => "DISCONNECTED",
            WifiState::On => "ON",
            WifiState::Off => "OFF",
            WifiState::ConnectFailed => "CONNECT_FAILED",
        }
    }
}

impl fmt::Display for WifiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
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
    use super::WifiState;

    #[test]
    fn display_uses_upper_snake_tokens() {
        assert_eq!(WifiState::Connected.to_string(), "CONNECTED");
        assert_eq!(WifiState::ConnectFailed.to_string(), "CONNECT_FAILED");
        assert_eq!(WifiState::Off.to_string(), "OFF");
    }

    #[test]
    fn states_compare_by_variant() {
        assert_eq!(WifiState::On, WifiState::On);
        assert_ne!(WifiState::On, WifiState::Off);
        assert_ne!(WifiState::Disconnected, WifiState::ConnectFailed);
    }
}
