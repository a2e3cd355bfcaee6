// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow;
use colored::*;
use tracing::info_span;

use crate::terminal::{colors, print::Print, spinner::SpinnerGuard};
use aerial_common::{config::Config, models::network::NetworkRecord, success, warn};

use super::link_service;

pub async fn scan(ssid: Option<&str>, cfg: &Config) -> anyhow::Result<ExitCode> {
    Print::header("scanning for networks");

    let service = link_service();
    let start_time: Instant = Instant::now();

    let _guard: Option<SpinnerGuard> = if cfg.json { None } else { Some(run_spinner()) };

    let records: Vec<NetworkRecord> =
        tokio::task::spawn_blocking(move || service.scan()).await??;

    let total_time: Duration = start_time.elapsed();

    if let Some(target) = ssid {
        return Ok(report_visibility(target, &records, cfg));
    }

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(ExitCode::SUCCESS);
    }

    if records.is_empty() {
        Print::no_results();
        return Ok(ExitCode::SUCCESS);
    }

    Print::networks(&records)?;
    Print::scan_summary(records.len(), total_time);

    Ok(ExitCode::SUCCESS)
}

fn run_spinner() -> SpinnerGuard {
    let span = info_span!("scan", indicatif.pb_show = true);
    let _enter = span.enter();

    SpinnerGuard::with_status(span.clone(), || {
        "Listening for beacon frames..."
            .color(colors::TEXT_DEFAULT)
            .italic()
    })
}

fn report_visibility(target: &str, records: &[NetworkRecord], cfg: &Config) -> ExitCode {
    let visible: bool = records.iter().any(|record| record.ssid == target);

    if cfg.json {
        println!(
            "{}",
            serde_json::json!({ "ssid": target, "visible": visible })
        );
    } else if visible {
        success!("{target} is broadcasting in range.");
    } else {
        warn!("{target} is not visible in this scan.");
    }

    if visible {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
