// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Adapter variant for Linux hosts running NetworkManager, driving `nmcli`.

use std::sync::Mutex;

use aerial_common::info;
use aerial_common::models::link::{ConnectionInfo, LinkState};
use aerial_common::models::network::NetworkRecord;
use aerial_common::models::state::WifiState;

use crate::adapter::{AdapterError, Platform, WifiAdapter, interface_guard};
use crate::executor::{CommandRunner, shell_quote};
use crate::parser;

/// `nmcli radio wifi` answers `enabled` or `disabled`.
const POWER_ON_TOKEN: &str = "enabled";

pub struct LinuxAdapter {
    runner: Box<dyn CommandRunner>,
    interface: Mutex<Option<String>>,
}

impl LinuxAdapter {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            interface: Mutex::new(None),
        }
    }

    /// Issues the radio command and confirms the state actually moved.
    ///
    /// The radio switch is global in NetworkManager, so a failed interface
    /// resolution does not abort the toggle; the guard then falls back to a
    /// shared key.
    fn toggle_power(&self, flag: &str, expected: WifiState) -> bool {
        let interface = self.interface_name().unwrap_or_default();
        let guard = interface_guard(&interface);
        let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        info!(verbosity = 2, "Wlan radio power {flag}");
        if self
            .runner
            .run_checked(&format!("nmcli radio wifi {flag}"))
            .is_err()
        {
            return false;
        }
        matches!(self.power_state(), Ok(state) if state == expected)
    }
}

impl WifiAdapter for LinuxAdapter {
    fn platform(&self) -> Platform {
        Platform::Linux
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

        let raw = self.runner.run_checked("nmcli -t -f DEVICE,TYPE dev")?;
        let name = parser::parse_nmcli_devices(&raw).unwrap_or_default();
        if !name.is_empty() {
            info!(verbosity = 1, "Resolved wlan interface {name}");
            *cached = Some(name.clone());
        }
        Ok(name)
    }

    fn current_connection(&self) -> Result<ConnectionInfo, AdapterError> {
        let interface = self.interface_name()?;
        let raw = self
            .runner
            .run_checked(&format!("nmcli dev show {interface}"))?;
        Ok(parser::parse_nmcli_current(&raw))
    }

    fn scan(&self) -> Result<Vec<NetworkRecord>, AdapterError> {
        let raw = self
            .runner
            .run_checked("nmcli -t -f SSID,SIGNAL,CHAN,SECURITY dev wifi list")?;
        Ok(parser::parse_nmcli_scan(&raw))
    }

    fn power_state(&self) -> Result<WifiState, AdapterError> {
        let raw = self.runner.run_checked("nmcli radio wifi")?;
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
            "nmcli dev wifi connect {} password {} ifname {}",
            shell_quote(ssid),
            shell_quote(password),
            interface
        ))?;

        // nmcli can leave the previous profile active on a bad passphrase.
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
