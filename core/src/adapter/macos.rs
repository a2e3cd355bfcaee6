// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Adapter variant for macOS, driving `airport` and `networksetup`.

use std::sync::Mutex;

use aerial_common::info;
use aerial_common::models::link::{ConnectionInfo, LinkState};
use aerial_common::models::network::NetworkRecord;
use aerial_common::models::state::WifiState;

use crate::adapter::{AdapterError, Platform, WifiAdapter, interface_guard};
use crate::executor::{CommandRunner, shell_quote};
use crate::parser;

/// Private framework binary, stable across macOS releases.
const AIRPORT_PATH: &str =
    "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport";

/// `networksetup -getairportpower` answers `Wi-Fi Power (en0): On`.
const POWER_ON_TOKEN: &str = "On";

pub struct MacAdapter {
    runner: Box<dyn CommandRunner>,
    interface: Mutex<Option<String>>,
}

impl MacAdapter {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            interface: Mutex::new(None),
        }
    }

    /// Issues the power command and confirms the radio actually moved.
    ///
    /// Every failure on this path degrades to `false`; callers treat a
    /// radio that will not toggle as routine, not as a fault.
    fn toggle_power(&self, flag: &str, expected: WifiState) -> bool {
        let Ok(interface) = self.interface_name() else {
            return false;
        };
        let guard = interface_guard(&interface);
        let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        info!(verbosity = 2, "Wlan interface {interface} power {flag}");
        let command = format!("networksetup -setairportpower {interface} {flag}");
        if self.runner.run_checked(&command).is_err() {
            return false;
        }
        matches!(self.power_state(), Ok(state) if state == expected)
    }
}

impl WifiAdapter for MacAdapter {
    fn platform(&self) -> Platform {
        Platform::MacLike
    }

    fn interface_name(&self) -> Result<String, AdapterError> {
        let mut cached = self
            .interface
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(name) = cached.as_ref()
            && !name.is_empty()
        {
            return Ok(name.clone());
        }

        let raw = self
            .runner
            .run_checked("networksetup -listallhardwareports")?;
        let name = parser::parse_hardware_ports(&raw).unwrap_or_default();
        if !name.is_empty() {
            info!(verbosity = 1, "Resolved wlan interface {name}");
            *cached = Some(name.clone());
        }
        Ok(name)
    }

    fn current_connection(&self) -> Result<ConnectionInfo, AdapterError> {
        let raw = self.runner.run_checked(&format!("{AIRPORT_PATH} -I"))?;
        Ok(parser::parse_current(&raw))
    }

    fn scan(&self) -> Result<Vec<NetworkRecord>, AdapterError> {
        let raw = self.runner.run_checked(&format!("{AIRPORT_PATH} -s"))?;
        Ok(parser::parse_scan(&raw))
    }

    fn power_state(&self) -> Result<WifiState, AdapterError> {
        let interface = self.interface_name()?;
        let raw = self
            .runner
            .run_checked(&format!("networksetup -getairportpower {interface}"))?;
        if raw.contains(POWER_ON_TOKEN) {
            Ok(WifiState::On)
        } else {
            Ok(WifiState::Off)
        }
    }

    fn power_on(&self) -> Result<bool, AdapterError> {
        Ok(self.toggle_power("on", WifiState::On))
    }

    fn power_off(&self) -> Result<bool, AdapterError> {
        Ok(self.toggle_power("off", WifiState::Off))
    }

    fn join(&self, ssid: &str, password: &str) -> Result<WifiState, AdapterError> {
        let interface = self.interface_name()?;
        let guard = interface_guard(&interface);
        let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        info!(verbosity = 2, "Joining {ssid} on {interface}");
        self.runner.run_checked(&format!(
            "networksetup -setairportnetwork {} {} {}",
            interface,
            shell_quote(ssid),
            shell_quote(password)
        ))?;

        // networksetup exits zero even on bad credentials, hence the check.
        let current = self.current_connection()?;
        if current.link_state() != LinkState::Running || current.ssid != ssid {
            return Ok(WifiState::ConnectFailed);
        }
        Ok(WifiState::Connected)
    }

    fn leave(&self) -> Result<Option<WifiState>, AdapterError> {
        Ok(self.power_off()?.then_some(WifiState::Disconnected))
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
    use super::*;
    use crate::executor::{CommandOutput, FnRunner, ok_output};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    const HARDWARE_PORTS: &str = "\
Hardware Port: Wi-Fi
Device: en0
Ethernet Address: aa:bb:cc:dd:ee:ff";

    fn airport_info(state: &str, ssid: &str) -> String {
        format!(
            "     agrCtlRSSI: -60\n          state: {state}\n           SSID: {ssid}\n"
        )
    }

    fn scripted(
        power_answer: &'static str,
        link_state: &'static str,
        link_ssid: &'static str,
    ) -> MacAdapter {
        MacAdapter::new(Box::new(FnRunner(move |command: &str| {
            if command.contains("listallhardwareports") {
                Ok(ok_output(HARDWARE_PORTS))
            } else if command.contains("-getairportpower") {
                Ok(ok_output(power_answer))
            } else if command.contains("-setairportpower") {
                Ok(ok_output(""))
            } else if command.contains("-setairportnetwork") {
                Ok(ok_output(""))
            } else if command.ends_with("airport -I") {
                Ok(ok_output(&airport_info(link_state, link_ssid)))
            } else {
                panic!("unexpected command: {command}")
            }
        })))
    }

    #[test]
    fn join_confirms_running_state_and_matching_ssid() {
        let adapter = scripted("Wi-Fi Power (en0): On", "running", "HomeBase");

        let state = adapter.join("HomeBase", "hunter2").expect("join runs");
        assert_eq!(state, WifiState::Connected);
    }

    #[test]
    fn join_rejects_a_foreign_ssid_even_when_running() {
        let adapter = scripted("Wi-Fi Power (en0): On", "running", "NeighborNet");

        let state = adapter.join("HomeBase", "hunter2").expect("join runs");
        assert_eq!(state, WifiState::ConnectFailed);
    }

    #[test]
    fn join_rejects_a_link_that_is_not_running() {
        let adapter = scripted("Wi-Fi Power (en0): On", "init", "HomeBase");

        let state = adapter.join("HomeBase", "hunter2").expect("join runs");
        assert_eq!(state, WifiState::ConnectFailed);
    }

    #[test]
    fn power_on_is_false_when_the_radio_stays_off() {
        let adapter = scripted("Wi-Fi Power (en0): Off", "init", "");

        assert!(!adapter.power_on().expect("no unsupported error"));
    }

    #[test]
    fn power_off_confirms_against_a_fresh_state_query() {
        let adapter = scripted("Wi-Fi Power (en0): Off", "init", "");

        assert!(adapter.power_off().expect("no unsupported error"));
    }

    #[test]
    fn power_state_reads_the_affirmative_token() {
        let on = scripted("Wi-Fi Power (en0): On", "running", "HomeBase");
        let off = scripted("Wi-Fi Power (en0): Off", "init", "");

        assert_eq!(on.power_state().expect("query runs"), WifiState::On);
        assert_eq!(off.power_state().expect("query runs"), WifiState::Off);
    }

    #[test]
    fn leave_maps_power_off_success_to_disconnected() {
        let clean = scripted("Wi-Fi Power (en0): Off", "init", "");
        let stuck = scripted("Wi-Fi Power (en0): On", "running", "HomeBase");

        assert_eq!(
            clean.leave().expect("no unsupported error"),
            Some(WifiState::Disconnected)
        );
        assert_eq!(stuck.leave().expect("no unsupported error"), None);
    }

    #[test]
    fn interface_is_resolved_once_and_cached() {
        let resolutions = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&resolutions);

        let adapter = MacAdapter::new(Box::new(FnRunner(move |command: &str| {
            assert!(command.contains("listallhardwareports"));
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(ok_output(HARDWARE_PORTS))
        })));

        assert_eq!(adapter.interface_name().expect("resolves"), "en0");
        assert_eq!(adapter.interface_name().expect("resolves"), "en0");
        assert_eq!(resolutions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_interface_is_not_cached() {
        let resolutions = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&resolutions);

        let adapter = MacAdapter::new(Box::new(FnRunner(move |_: &str| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(ok_output("Hardware Port: Ethernet\nDevice: en3"))
        })));

        assert_eq!(adapter.interface_name().expect("resolves"), "");
        assert_eq!(adapter.interface_name().expect("resolves"), "");
        assert_eq!(resolutions.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn current_connection_projects_airport_output() {
        let adapter = scripted("Wi-Fi Power (en0): On", "running", "HomeBase");

        let info = adapter.current_connection().expect("query runs");
        assert_eq!(info.ssid, "HomeBase");
        assert_eq!(info.signal, "-60");
        assert_eq!(info.link_state(), LinkState::Running);
    }

    #[test]
    fn scan_failure_carries_the_command_text() {
        let adapter = MacAdapter::new(Box::new(FnRunner(|command: &str| {
            let exit_code = if command.ends_with("airport -s") { 1 } else { 0 };
            Ok(CommandOutput {
                stdout: String::new(),
                exit_code,
            })
        })));

        let err = adapter.scan().expect_err("non-zero exit must fail");
        match err {
            AdapterError::CommandFailed { command, .. } => {
                assert!(command.ends_with("airport -s"), "got: {command}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
