// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow;
use is_root::is_root;

use crate::terminal::print::Print;
use aerial_common::{config::Config, debug, models::link::ConnectionInfo, models::state::WifiState, success, warn};
use aerial_core::link::LinkService;

use super::link_service;

pub async fn disconnect(cfg: &Config) -> anyhow::Result<ExitCode> {
    Print::header("dropping the link");

    if cfg!(target_os = "linux") && !is_root() {
        debug!("Not running as root; NetworkManager may ask polkit for approval.");
    }

    let service: Arc<LinkService> = Arc::new(link_service());

    // Capture the association before touching the radio, it is gone after.
    let svc = Arc::clone(&service);
    let info: ConnectionInfo =
        tokio::task::spawn_blocking(move || svc.current_connection().unwrap_or_default()).await?;

    let svc = Arc::clone(&service);
    let verdict: Option<WifiState> = tokio::task::spawn_blocking(move || svc.leave()).await??;

    if verdict != Some(WifiState::Disconnected) {
        if cfg.json {
            println!(
                "{}",
                serde_json::json!({ "state": "UNCHANGED", "ssid": info.ssid })
            );
        } else {
            warn!("The platform refused to drop the link.");
        }
        return Ok(ExitCode::FAILURE);
    }

    // The drop works by cutting radio power; bring it back so the
    // interface stays usable for whatever comes next.
    let svc = Arc::clone(&service);
    let restored: bool = tokio::task::spawn_blocking(move || svc.power_on()).await??;
    if !restored {
        debug!("Radio did not report back on after the drop.");
    }

    if cfg.json {
        println!(
            "{}",
            serde_json::json!({ "state": WifiState::Disconnected, "ssid": info.ssid })
        );
        return Ok(ExitCode::SUCCESS);
    }

    if info.is_associated() {
        success!("Dropped the link to {}.", info.ssid);
    } else {
        success!("Radio cycled; there was no association to drop.");
    }

    Ok(ExitCode::SUCCESS)
}
