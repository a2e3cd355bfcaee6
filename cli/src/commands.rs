// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! This module defines the strict schema for user input.
//!
//! It serves as the single source of truth for the application's command-line interface.
//! While the *execution* logic for each command resides in its own submodule (e.g., `connect.rs`),
//! the *definition* of the arguments, flags, and help text is centralized here.
//!
//! ## Architectural Role
//!
//! This module performs two key architectural functions:
//!
//! 1.  **Input Normalization**: It uses `clap` to validate user inputs, making sure that necessary
//!     arguments are present and types are correct (e.g., strictly typed numbers vs strings)
//!     before the application attempts to run.
//! 2.  **State Translation**: via the `From<&CommandLine> for Config` implementation, it
//!     decouples the external interface (CLI flags) from the internal application state (`Config`).
//!     This allows the core libraries to remain agnostic of the user interface layer.
//!
//! ## Structure
//!
//! The CLI is structured hierarchically:
//!
//! * [`CommandLine`]: The top-level struct containing global flags applicable to the entire process
//!   (logging, formatting, verbosity).
//! * [`Commands`]: An enum representing the specific operation mode. Since these are mutually
//!   exclusive, the type system ensures the application cannot be in two states (e.g., "Scan"
//!   and "Connect") simultaneously.

pub mod connect;
pub mod current;
pub mod disconnect;
pub mod radio;
pub mod scan;

use aerial_common::config::Config;
use aerial_core::adapter::{self, Platform};
use aerial_core::link::LinkService;
use aerial_core::probe::TcpProbe;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aerial")]
#[command(about = "Cross-platform wireless link management from the terminal.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Keep logs and colors but hide the ASCII art
    #[arg(long = "no-banner", global = true)]
    pub no_banner: bool,

    /// Emit machine-readable JSON instead of styled output
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Reduce UI visual density (-q: reduce styling)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase logging detail (-v: debug logs, -vv: platform command chatter)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display the currently associated network
    #[command(alias = "c")]
    Current,

    /// List wireless networks in range
    #[command(alias = "s")]
    Scan {
        /// Only report whether this network is visible
        #[arg(long, value_name = "SSID")]
        ssid: Option<String>,
    },

    /// Join a network by name and passphrase
    #[command(alias = "j")]
    Connect {
        #[arg(value_name = "SSID")]
        ssid: String,
        #[arg(value_name = "PASSWORD")]
        password: String,
        /// Scan rounds to wait for the network to become visible
        #[arg(long, default_value_t = 5)]
        retry: u32,
    },

    /// Drop the current association
    #[command(alias = "d")]
    Disconnect,

    /// Control or query the wireless radio
    Radio {
        #[command(subcommand)]
        action: RadioAction,
    },
}

#[derive(Subcommand)]
pub enum RadioAction {
    /// Power the radio on
    On,
    /// Power the radio off
    Off,
    /// Report the current power state
    Status,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            no_banner: cmd.no_banner || cmd.json,
            quiet: cmd.quiet,
            json: cmd.json,
        }
    }
}

/// Builds the link service every subcommand runs against, wired to the
/// platform detected at startup.
pub(crate) fn link_service() -> LinkService {
    LinkService::new(
        adapter::create_adapter(Platform::detect()),
        Box::new(TcpProbe::new()),
    )
}
