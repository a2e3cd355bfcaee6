use std::process::ExitCode;

use anyhow;
use colored::*;
use is_root::is_root;
use tracing::info_span;

use crate::terminal::{
    colors,
    print::{self, GLOBAL_KEY_WIDTH, Print},
    spinner::SpinnerGuard,
};
use aerial_common::{
    config::Config,
    debug, error,
    models::outcome::{CODE_UNREACHABLE, ConnectOutcome},
    models::state::WifiState,
    success, warn,
};
use aerial_core::link;

use super::link_service;

pub async fn connect(
    ssid: &str,
    password: &str,
    retry: u32,
    cfg: &Config,
) -> anyhow::Result<ExitCode> {
    Print::header("joining network");

    if cfg!(target_os = "linux") && !is_root() {
        debug!("Not running as root; NetworkManager may ask polkit for approval.");
    }

    let service = link_service();

    let _guard: Option<SpinnerGuard> = if cfg.json {
        None
    } else {
        Some(run_spinner(ssid))
    };

    let owned_ssid: String = ssid.to_string();
    let owned_password: String = password.to_string();
    let outcome: Option<ConnectOutcome> =
        tokio::task::spawn_blocking(move || service.connect(&owned_ssid, &owned_password, retry))
            .await??;

    let Some(outcome) = outcome else {
        return Ok(network_not_found(ssid, retry, cfg));
    };

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome_exit_code(&outcome));
    }

    report_outcome(&outcome);
    Ok(outcome_exit_code(&outcome))
}

fn run_spinner(ssid: &str) -> SpinnerGuard {
    let span = info_span!("connect", indicatif.pb_show = true);
    let _enter = span.enter();

    let ssid: String = ssid.to_string();
    SpinnerGuard::with_status(span.clone(), move || {
        let attempt: u32 = link::get_scan_attempts();
        let text: String = if attempt == 0 {
            "Preparing the wireless interface...".to_string()
        } else {
            format!("Scan attempt {attempt}: looking for {ssid}...")
        };
        text.color(colors::TEXT_DEFAULT).italic()
    })
}

fn network_not_found(ssid: &str, retry: u32, cfg: &Config) -> ExitCode {
    if cfg.json {
        println!("{}", serde_json::json!({ "ssid": ssid, "found": false }));
        return ExitCode::FAILURE;
    }
    warn!("{ssid} did not show up in {retry} scans; credentials were never sent.");
    ExitCode::FAILURE
}

fn report_outcome(outcome: &ConnectOutcome) {
    GLOBAL_KEY_WIDTH.set(10);

    let state_colored: ColoredString = match outcome.state {
        WifiState::Connected => outcome.state.to_string().green().bold(),
        WifiState::ConnectFailed => outcome.state.to_string().red().bold(),
        _ => outcome.state.to_string().yellow(),
    };

    print::aligned_line("SSID", outcome.ssid.as_str());
    print::aligned_line("State", state_colored);
    print::aligned_line("Code", outcome.code.to_string().as_str());
    if let Some(cost) = outcome.ping_cost {
        print::aligned_line(
            "Ping",
            format!("{}ms ({})", cost.as_millis(), outcome.domain).as_str(),
        );
    }

    if outcome.is_success() {
        success!("{}", outcome.message);
    } else if outcome.code == CODE_UNREACHABLE {
        warn!("{}", outcome.message);
    } else {
        error!("{}", outcome.message);
    }
}

fn outcome_exit_code(outcome: &ConnectOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
