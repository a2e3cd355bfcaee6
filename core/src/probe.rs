// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Post-join reachability checking.
//!
//! After a join is verified the orchestrator asks one question: does
//! anything beyond the access point answer? [`TcpProbe`] answers it with a
//! plain TCP handshake, no ICMP privileges required.

use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

/// Defines the contract for checking whether a host answers at all.
pub trait ReachabilityProbe: Send + Sync {
    /// Returns the round-trip time to `host`, or `None` when it never
    /// answered within the probe's own deadline.
    fn probe(&self, host: &str) -> Option<Duration>;
}

/// Probes reachability by attempting a TCP handshake.
///
/// A refused connection still proves the network path works, so it counts
/// as an answer. Only timeouts, unroutable addresses and failed name
/// resolution count as silence.
pub struct TcpProbe {
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new() -> Self {
        Self {
            port: 443,
            timeout: Duration::from_secs(3),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ReachabilityProbe for TcpProbe {
    fn probe(&self, host: &str) -> Option<Duration> {
        let addrs = (host, self.port).to_socket_addrs().ok()?;
        for addr in addrs {
            let start: Instant = Instant::now();
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(_) => return Some(start.elapsed()),
                Err(e) if e.kind() == io::ErrorKind::ConnectionRefused => {
                    return Some(start.elapsed());
                }
                Err(_) => continue,
            }
        }
        None
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
