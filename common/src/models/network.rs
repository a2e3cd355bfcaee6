// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::Serialize;

/// A single network seen during a scan.
///
/// Fields hold the raw text of the scan row. Duplicate SSIDs are expected on
/// multi-band access points and are preserved as separate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRecord {
    /// Advertised network name.
    pub ssid: String,
    /// Received signal strength, typically dBm or percent.
    pub signal: String,
    /// Radio channel.
    pub channel: String,
    /// High-throughput capability flag.
    pub ht: String,
    /// Advertised security suites, empty for open networks.
    pub security: String,
}

impl NetworkRecord {
    /// Parses the signal column as a number, if it is one.
    /// Accepts both `-67` style dBm readings and `87%` style percentages.
    pub fn signal_value(&self) -> Option<i32> {
        self.signal.trim().trim_end_matches('%').trim().parse().ok()
    }

    /// Whether the network advertises any security at all.
    pub fn is_secured(&self) -> bool {
        !self.security.trim().is_empty()
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
    use super::NetworkRecord;

    fn record(signal: &str, security: &str) -> NetworkRecord {
        NetworkRecord {
            ssid: "lab".to_string(),
            signal: signal.to_string(),
            channel: "36".to_string(),
            ht: "Y".to_string(),
            security: security.to_string(),
        }
    }

    #[test]
    fn signal_value_parses_negative_dbm() {
        assert_eq!(record("-67", "WPA2(PSK/AES/AES)").signal_value(), Some(-67));
        assert_eq!(record(" 83 ", "WPA2").signal_value(), Some(83));
    }

    #[test]
    fn signal_value_accepts_percentages() {
        assert_eq!(record("87%", "WPA2").signal_value(), Some(87));
        assert_eq!(record("87 %", "WPA2").signal_value(), Some(87));
    }

    #[test]
    fn signal_value_rejects_garbage() {
        assert_eq!(record("n/a", "").signal_value(), None);
        assert_eq!(record("", "").signal_value(), None);
    }

    #[test]
    fn open_network_is_not_secured() {
        assert!(!record("-40", "").is_secured());
        assert!(!record("-40", "  ").is_secured());
        assert!(record("-40", "WPA3(SAE)").is_secured());
    }
}
