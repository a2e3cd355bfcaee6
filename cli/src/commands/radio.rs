// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::process::ExitCode;

use anyhow;
use colored::*;
use is_root::is_root;

use crate::terminal::print::{self, GLOBAL_KEY_WIDTH, Print};
use aerial_common::{config::Config, debug, models::state::WifiState, success, warn};

use super::{RadioAction, link_service};

pub async fn radio(action: &RadioAction, cfg: &Config) -> anyhow::Result<ExitCode> {
    Print::header("radio power");

    if cfg!(target_os = "linux") && !is_root() {
        debug!("Not running as root; NetworkManager may ask polkit for approval.");
    }

    let service = link_service();

    match action {
        RadioAction::On => {
            let confirmed: bool =
                tokio::task::spawn_blocking(move || service.power_on()).await??;
            report_toggle("on", confirmed, cfg)
        }
        RadioAction::Off => {
            let confirmed: bool =
                tokio::task::spawn_blocking(move || service.power_off()).await??;
            report_toggle("off", confirmed, cfg)
        }
        RadioAction::Status => {
            let state: WifiState =
                tokio::task::spawn_blocking(move || service.power_state()).await??;
            report_status(state, cfg)
        }
    }
}

fn report_toggle(direction: &str, confirmed: bool, cfg: &Config) -> anyhow::Result<ExitCode> {
    if cfg.json {
        println!(
            "{}",
            serde_json::json!({ "requested": direction, "confirmed": confirmed })
        );
        return Ok(toggle_exit_code(confirmed));
    }

    if confirmed {
        success!("Radio power confirmed {direction}.");
    } else {
        warn!("Radio power {direction} was not confirmed; check `aerial radio status`.");
    }
    Ok(toggle_exit_code(confirmed))
}

fn report_status(state: WifiState, cfg: &Config) -> anyhow::Result<ExitCode> {
    if cfg.json {
        println!("{}", serde_json::json!({ "power": state }));
        return Ok(ExitCode::SUCCESS);
    }

    let state_colored: ColoredString = match state {
        WifiState::On => state.to_string().green().bold(),
        _ => state.to_string().yellow(),
    };

    GLOBAL_KEY_WIDTH.set(6);
    print::aligned_line("Power", state_colored);
    Ok(ExitCode::SUCCESS)
}

fn toggle_exit_code(confirmed: bool) -> ExitCode {
    if confirmed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
