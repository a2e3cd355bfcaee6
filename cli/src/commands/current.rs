use std::env;
use std::process::ExitCode;

use anyhow;
use sys_info;

use crate::terminal::{
    format,
    print::{self, GLOBAL_KEY_WIDTH, Print},
};
use aerial_common::{config::Config, models::link::ConnectionInfo, warn};
use aerial_core::adapter::Platform;

use super::link_service;

pub async fn current(cfg: &Config) -> anyhow::Result<ExitCode> {
    let service = link_service();
    let platform: Platform = service.platform();

    let (info, interface) = tokio::task::spawn_blocking(move || {
        let interface: String = service.interface_name().unwrap_or_default();
        let info: ConnectionInfo = service.current_connection()?;
        Ok::<_, aerial_core::adapter::AdapterError>((info, interface))
    })
    .await??;

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(associated_exit_code(&info));
    }

    GLOBAL_KEY_WIDTH.set(10);

    Print::header("local system");
    print_local_system(platform, &interface)?;

    Print::header("wireless link");
    if !info.is_associated() {
        warn!("No wireless association reported.");
        return Ok(ExitCode::FAILURE);
    }

    print::tree_head(0, &info.ssid);
    print::as_tree(format::connection_to_details(&info));

    Ok(ExitCode::SUCCESS)
}

fn print_local_system(platform: Platform, interface: &str) -> anyhow::Result<()> {
    let hostname: String = sys_info::hostname()?;
    print::aligned_line("Hostname", hostname);
    let release = sys_info::os_release().unwrap_or_else(|_| String::from(""));
    let os_name = sys_info::os_type()?;
    print::aligned_line("OS", format!("{} {}", os_name, release).as_str());
    if let Ok(user) = env::var("USER").or_else(|_| env::var("USERNAME")) {
        print::aligned_line("User", user);
    }
    print::aligned_line("Platform", platform.to_string().as_str());
    if !interface.is_empty() {
        print::aligned_line("Interface", interface);
    }
    Ok(())
}

fn associated_exit_code(info: &ConnectionInfo) -> ExitCode {
    if info.is_associated() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
