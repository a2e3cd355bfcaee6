// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod link;

pub mod fakes {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use aerial_common::models::link::ConnectionInfo;
    use aerial_common::models::network::NetworkRecord;
    use aerial_common::models::state::WifiState;
    use aerial_core::adapter::{AdapterError, Platform, WifiAdapter};
    use aerial_core::probe::ReachabilityProbe;

    /// A stateful adapter stand-in for whole-flow scenarios.
    ///
    /// Unlike a stub it keeps a radio power state and a current association,
    /// so a connect followed by a query behaves like the real platform does:
    /// joins change what `current_connection` reports, power cuts clear it.
    pub struct ScriptedAdapter {
        power: Mutex<WifiState>,
        enable_succeeds: bool,
        join_verdict: WifiState,
        scans: Mutex<VecDeque<Vec<NetworkRecord>>>,
        joins: Arc<AtomicU32>,
        current: Mutex<ConnectionInfo>,
    }

    impl ScriptedAdapter {
        pub fn new(power: WifiState) -> Self {
            Self {
                power: Mutex::new(power),
                enable_succeeds: true,
                join_verdict: WifiState::Connected,
                scans: Mutex::new(VecDeque::new()),
                joins: Arc::new(AtomicU32::new(0)),
                current: Mutex::new(ConnectionInfo::default()),
            }
        }

        pub fn refusing_enable(mut self) -> Self {
            self.enable_succeeds = false;
            self
        }

        pub fn rejecting_joins(mut self) -> Self {
            self.join_verdict = WifiState::ConnectFailed;
            self
        }

        /// Scripts the networks visible per scan round; once the script is
        /// exhausted every further scan comes back empty.
        pub fn with_scans(self, rounds: &[&[&str]]) -> Self {
            {
                let mut scans = self.scans.lock().unwrap();
                for round in rounds {
                    scans.push_back(round.iter().map(|ssid| record(ssid)).collect());
                }
            }
            self
        }

        /// Clones the join counter out before the adapter is boxed away
        /// into a service.
        pub fn join_counter(&self) -> Arc<AtomicU32> {
            Arc::clone(&self.joins)
        }
    }

    pub fn record(ssid: &str) -> NetworkRecord {
        NetworkRecord {
            ssid: ssid.to_string(),
            signal: "-58".to_string(),
            channel: "44".to_string(),
            ht: "Y".to_string(),
            security: "WPA2(PSK/AES/AES)".to_string(),
        }
    }

    impl WifiAdapter for ScriptedAdapter {
        fn platform(&self) -> Platform {
            Platform::MacLike
        }

        fn interface_name(&self) -> Result<String, AdapterError> {
            Ok("en0".to_string())
        }

        fn current_connection(&self) -> Result<ConnectionInfo, AdapterError> {
            Ok(self.current.lock().unwrap().clone())
        }

        fn scan(&self) -> Result<Vec<NetworkRecord>, AdapterError> {
            Ok(self.scans.lock().unwrap().pop_front().unwrap_or_default())
        }

        fn power_state(&self) -> Result<WifiState, AdapterError> {
            Ok(*self.power.lock().unwrap())
        }

        fn power_on(&self) -> Result<bool, AdapterError> {
            if !self.enable_succeeds {
                return Ok(false);
            }
            *self.power.lock().unwrap() = WifiState::On;
            Ok(true)
        }

        fn power_off(&self) -> Result<bool, AdapterError> {
            *self.power.lock().unwrap() = WifiState::Off;
            *self.current.lock().unwrap() = ConnectionInfo::default();
            Ok(true)
        }

        fn join(&self, ssid: &str, _password: &str) -> Result<WifiState, AdapterError> {
            self.joins.fetch_add(1, Ordering::SeqCst);
            if self.join_verdict == WifiState::Connected {
                let mut current = self.current.lock().unwrap();
                current.ssid = ssid.to_string();
                current.state = "running".to_string();
                current.signal = "-58".to_string();
            }
            Ok(self.join_verdict)
        }

        fn leave(&self) -> Result<Option<WifiState>, AdapterError> {
            Ok(self.power_off()?.then_some(WifiState::Disconnected))
        }
    }

    pub struct ScriptedProbe {
        answer: Option<Duration>,
    }

    impl ScriptedProbe {
        pub fn answering_in(elapsed: Duration) -> Self {
            Self {
                answer: Some(elapsed),
            }
        }

        pub fn silent() -> Self {
            Self { answer: None }
        }
    }

    impl ReachabilityProbe for ScriptedProbe {
        fn probe(&self, _host: &str) -> Option<Duration> {
            self.answer
        }
    }
}
