// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Process execution for platform wireless utilities.
//!
//! Every adapter talks to its platform through [`CommandRunner`], so tests
//! can script utility output without spawning anything. The only production
//! implementation is [`ShellRunner`], which hands the command line to the
//! platform shell and captures stdout.

use crate::adapter::AdapterError;
use std::process::Command;

/// Captured result of one finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Everything the process wrote to stdout, lossily decoded.
    pub stdout: String,
    /// Process exit code, `-1` when terminated by a signal.
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs platform commands and captures their output.
pub trait CommandRunner: Send + Sync {
    /// Runs `command` to completion.
    ///
    /// Fails only when the process cannot be spawned at all. A process that
    /// starts and exits non-zero still yields `Ok` so callers can inspect
    /// the exit code themselves.
    fn run(&self, command: &str) -> Result<CommandOutput, AdapterError>;

    /// Runs `command` and treats any non-zero exit as a failure.
    ///
    /// This is what the adapters use for every query and mutation. The error
    /// carries the literal command line so the operator can re-run it by
    /// hand.
    fn run_checked(&self, command: &str) -> Result<String, AdapterError> {
        let output: CommandOutput = self.run(command)?;
        if !output.success() {
            return Err(AdapterError::CommandFailed {
                command: command.to_string(),
                detail: format!("exit status {}", output.exit_code),
            });
        }
        Ok(output.stdout)
    }
}

/// Executes commands through the platform shell.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, AdapterError> {
        let output = shell(command)
            .output()
            .map_err(|e| AdapterError::CommandFailed {
                command: command.to_string(),
                detail: e.to_string(),
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

/// Single-quotes `value` for safe interpolation into a shell command line.
///
/// SSIDs and passphrases regularly contain spaces, `$` and quotes. The value
/// is wrapped in single quotes with embedded single quotes spliced out in
/// the usual `'\''` form.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Test double that answers commands from a closure.
#[cfg(test)]
pub(crate) struct FnRunner<F>(pub F);

#[cfg(test)]
impl<F> CommandRunner for FnRunner<F>
where
    F: Fn(&str) -> Result<CommandOutput, AdapterError> + Send + Sync,
{
    fn run(&self, command: &str) -> Result<CommandOutput, AdapterError> {
        (self.0)(command)
    }
}

#[cfg(test)]
pub(crate) fn ok_output(stdout: &str) -> CommandOutput {
    CommandOutput {
        stdout: stdout.to_string(),
        exit_code: 0,
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

#[cfg(test)]
mod tests {
    use super::{CommandRunner, ShellRunner, shell_quote};
    use crate::adapter::AdapterError;

    #[test]
    #[cfg(unix)]
    fn captures_stdout_of_successful_command() {
        let runner: ShellRunner = ShellRunner;
        let output = runner.run("echo hello").expect("echo should spawn");

        assert_eq!(output.stdout.trim(), "hello");
        assert_eq!(output.exit_code, 0);
        assert!(output.success());
    }

    #[test]
    #[cfg(unix)]
    fn nonzero_exit_passes_through_run() {
        let runner: ShellRunner = ShellRunner;
        let output = runner.run("exit 3").expect("shell should spawn");

        assert_eq!(output.exit_code, 3);
        assert!(!output.success());
    }

    #[test]
    #[cfg(unix)]
    fn run_checked_reports_the_failing_command() {
        let runner: ShellRunner = ShellRunner;
        let err = runner
            .run_checked("exit 3")
            .expect_err("non-zero exit must fail");

        match err {
            AdapterError::CommandFailed { command, detail } => {
                assert_eq!(command, "exit 3");
                assert!(detail.contains("exit status 3"), "got: {detail}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn missing_binary_fails_through_the_shell() {
        let runner: ShellRunner = ShellRunner;
        // sh itself spawns fine and reports 127 for the unknown binary.
        let output = runner
            .run("definitely-not-a-real-binary-1f2e3d")
            .expect("shell should spawn");

        assert_eq!(output.exit_code, 127);
    }

    #[test]
    fn quoting_wraps_plain_values() {
        assert_eq!(shell_quote("lab"), "'lab'");
        assert_eq!(shell_quote("guest net"), "'guest net'");
    }

    #[test]
    fn quoting_escapes_embedded_single_quotes() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote("$(reboot)"), "'$(reboot)'");
    }
}
