// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Adapter variant for Windows, driving `netsh wlan`.
//!
//! Queries are fully supported. Mutations are not: `netsh wlan connect`
//! requires a pre-provisioned profile XML and the radio toggle requires
//! elevation, so those operations report [`AdapterError::Unsupported`]
//! instead of half-working.

use std::sync::Mutex;

use aerial_common::info;
use aerial_common::models::link::ConnectionInfo;
use aerial_common::models::network::NetworkRecord;
use aerial_common::models::state::WifiState;

use crate::adapter::{AdapterError, Platform, WifiAdapter};
use crate::executor::CommandRunner;
use crate::parser;

/// `netsh wlan show interfaces` reports `Radio status` with this token
/// when the software switch is on.
const POWER_ON_TOKEN: &str = "Software On";

pub struct WindowsAdapter {
    runner: Box<dyn CommandRunner>,
    interface: Mutex<Option<String>>,
}

impl WindowsAdapter {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            interface: Mutex::new(None),
        }
    }

    fn show_interfaces(&self) -> Result<String, AdapterError> {
        self.runner.run_checked("netsh wlan show interfaces")
    }
}

impl WifiAdapter for WindowsAdapter {
    fn platform(&self) -> Platform {
        Platform::Windows
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

        let raw = self.show_interfaces()?;
        let name = parser::parse_netsh_interface_name(&raw).unwrap_or_default();
        if !name.is_empty() {
            info!(verbosity = 1, "Resolved wlan interface {name}");
            *cached = Some(name.clone());
        }
        Ok(name)
    }

    fn current_connection(&self) -> Result<ConnectionInfo, AdapterError> {
        let raw = self.show_interfaces()?;
        Ok(parser::parse_netsh_current(&raw))
    }

    fn scan(&self) -> Result<Vec<NetworkRecord>, AdapterError> {
        let raw = self
            .runner
            .run_checked("netsh wlan show networks mode=bssid")?;
        Ok(parser::parse_netsh_networks(&raw))
    }

    fn power_state(&self) -> Result<WifiState, AdapterError> {
        let raw = self.show_interfaces()?;
        if raw.contains(POWER_ON_TOKEN) {
            Ok(WifiState::On)
        } else {
            Ok(WifiState::Off)
        }
    }

    fn power_on(&self) -> Result<bool, AdapterError> {
        Err(AdapterError::Unsupported {
            operation: "power_on",
            platform: Platform::Windows,
        })
    }

    fn power_off(&self) -> Result<bool, AdapterError> {
        Err(AdapterError::Unsupported {
            operation: "power_off",
            platform: Platform::Windows,
        })
    }

    fn join(&self, _ssid: &str, _password: &str) -> Result<WifiState, AdapterError> {
        Err(AdapterError::Unsupported {
            operation: "join",
            platform: Platform::Windows,
        })
    }

    fn leave(&self) -> Result<Option<WifiState>, AdapterError> {
        Err(AdapterError::Unsupported {
            operation: "leave",
            platform: Platform::Windows,
        })
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
