// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Orchestration logic for wireless connection attempts.
//!
//! This module coordinates the scan-then-join protocol on top of an
//! adapter variant:
//! - **Visibility**: bounded scan retries until the requested SSID shows up.
//! - **Authentication**: exactly one join attempt, never retried.
//! - **Verification**: a reachability probe after the link settles.
//!
//! Every terminal state is expressed as a [`ConnectOutcome`] (or an absent
//! one for "never became visible"), so callers get a single deterministic
//! verdict out of an inherently flaky radio operation.

use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use aerial_common::models::link::ConnectionInfo;
use aerial_common::models::network::NetworkRecord;
use aerial_common::models::outcome::ConnectOutcome;
use aerial_common::models::state::WifiState;
use aerial_common::{debug, info, success, warn};

use crate::adapter::{AdapterError, Platform, WifiAdapter};
use crate::probe::ReachabilityProbe;

/// Minimum time the OS needs to propagate a radio state change.
pub const SETTLE_INTERVAL: Duration = Duration::from_secs(2);

/// Reference host for the post-join reachability check.
pub const PROBE_HOST: &str = "jd.com";

pub static SCAN_ATTEMPTS: AtomicU32 = AtomicU32::new(0);

/// Scan attempt the in-flight connect is currently on, zero outside one.
pub fn get_scan_attempts() -> u32 {
    SCAN_ATTEMPTS.load(Ordering::Relaxed)
}

/// The primary entry point for connection management.
///
/// ### Capabilities
/// - **Connect protocol**: power-on fallback, bounded visibility retries,
///   single join, reachability verdict.
/// - **Facade**: passes queries and the disconnect path straight through to
///   the active adapter variant.
///
/// ### Integration Notes
/// - **State**: updates [`SCAN_ATTEMPTS`] so a UI can narrate progress.
/// - **Blocking**: every operation blocks on external processes; run it off
///   the UI thread.
pub struct LinkService {
    adapter: Box<dyn WifiAdapter>,
    probe: Box<dyn ReachabilityProbe>,
    settle: Duration,
    probe_host: String,
}

impl LinkService {
    pub fn new(adapter: Box<dyn WifiAdapter>, probe: Box<dyn ReachabilityProbe>) -> Self {
        Self {
            adapter,
            probe,
            settle: SETTLE_INTERVAL,
            probe_host: PROBE_HOST.to_string(),
        }
    }

    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn with_probe_host(mut self, host: &str) -> Self {
        self.probe_host = host.to_string();
        self
    }

    /// Runs one full connect attempt against `ssid`.
    ///
    /// `Ok(None)` means the SSID never became visible within `retry` scans;
    /// no join was attempted and nothing failed. `Ok(Some(outcome))` is the
    /// verdict of an attempt that got as far as touching the radio. Retries
    /// are purely about visibility; authentication runs at most once.
    pub fn connect(
        &self,
        ssid: &str,
        password: &str,
        retry: u32,
    ) -> Result<Option<ConnectOutcome>, AdapterError> {
        if self.adapter.power_state()? == WifiState::Off {
            info!("Wireless radio is off, enabling it");
            if !self.adapter.power_on()? {
                warn!("Wireless radio could not be enabled");
                return Ok(Some(ConnectOutcome::radio_failed(ssid)));
            }
            thread::sleep(self.settle);
        } else {
            debug!("Wireless radio is already powered on");
        }

        SCAN_ATTEMPTS.store(0, Ordering::Relaxed);
        let mut found = false;
        for attempt in 1..=retry {
            SCAN_ATTEMPTS.store(attempt, Ordering::Relaxed);
            if self.adapter.all_ssids()?.iter().any(|s| s == ssid) {
                success!("Found {ssid} on scan attempt {attempt}");
                found = true;
                break;
            }
            info!(verbosity = 1, "Scan attempt {attempt}: {ssid} not visible");
        }
        if !found {
            warn!("{ssid} never became visible after {retry} scan attempts");
            return Ok(None);
        }

        if self.adapter.join(ssid, password)? != WifiState::Connected {
            return Ok(Some(ConnectOutcome::join_failed(ssid)));
        }
        thread::sleep(self.settle);

        match self.probe.probe(&self.probe_host) {
            Some(elapsed) => {
                success!("Reached {} in {:.0?}", self.probe_host, elapsed);
                Ok(Some(ConnectOutcome::success(ssid, &self.probe_host, elapsed)))
            }
            None => {
                warn!("Link is up but {} did not answer", self.probe_host);
                Ok(Some(ConnectOutcome::unreachable(ssid, &self.probe_host)))
            }
        }
    }

    pub fn current_connection(&self) -> Result<ConnectionInfo, AdapterError> {
        self.adapter.current_connection()
    }

    pub fn scan(&self) -> Result<Vec<NetworkRecord>, AdapterError> {
        self.adapter.scan()
    }

    pub fn all_ssids(&self) -> Result<Vec<String>, AdapterError> {
        self.adapter.all_ssids()
    }

    pub fn power_state(&self) -> Result<WifiState, AdapterError> {
        self.adapter.power_state()
    }

    pub fn power_on(&self) -> Result<bool, AdapterError> {
        self.adapter.power_on()
    }

    pub fn power_off(&self) -> Result<bool, AdapterError> {
        self.adapter.power_off()
    }

    /// Disconnects by powering the radio off. `None` means the power-off
    /// was not confirmed and the link state should not be trusted.
    pub fn leave(&self) -> Result<Option<WifiState>, AdapterError> {
        debug!("Dropping the current association");
        self.adapter.leave()
    }

    pub fn interface_name(&self) -> Result<String, AdapterError> {
        self.adapter.interface_name()
    }

    pub fn platform(&self) -> Platform {
        self.adapter.platform()
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
