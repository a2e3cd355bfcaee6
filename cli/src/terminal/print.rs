// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::{cell::Cell, fmt::Display, sync::OnceLock, time::Duration};

use crate::terminal::{banner, colors, format};
use aerial_common::{config::Config, models::network::NetworkRecord, success};
use anyhow::bail;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

static PRINT: OnceLock<Print> = OnceLock::new();

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

type Detail = (String, ColoredString);

#[macro_export]
macro_rules! aprint {
    () => {
        $crate::aprint!("");
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: "aerial::print",
            raw_msg = %format_args!($($arg)*)
        );
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub struct Print {
    no_banner: bool,
    q_level: u8,
    json: bool,
}

impl Print {
    fn new(cfg: &Config) -> Self {
        Self {
            no_banner: cfg.no_banner,
            q_level: cfg.quiet,
            json: cfg.json,
        }
    }

    pub fn init(cfg: &Config) -> anyhow::Result<()> {
        let term = Self::new(cfg);
        if PRINT.set(term).is_err() {
            bail!("terminal has already been initialized")
        }
        Ok(())
    }

    fn get() -> &'static Self {
        PRINT.get().expect("terminal has not been initialized")
    }

    pub fn banner() {
        let p = Self::get();
        if p.no_banner || p.q_level > 0 {
            return;
        }

        let text_content: String = format!("⟦ AERIAL v{} ⟧ ", env!("CARGO_PKG_VERSION"));
        let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
        let text: ColoredString = text_content.bright_green().bold();
        let sep: ColoredString = "═"
            .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
            .bright_black();
        let output: String = format!("{}{}{}", sep, text, sep);

        aprint!("{}", output);
        banner::print();
    }

    pub fn header(msg: &str) {
        let p = Self::get();
        if p.json {
            return;
        }
        if p.q_level > 0 {
            aprint!();
            return;
        }

        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = formatted.chars().count();

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: ColoredString = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().bright_green(),
            "─".repeat(right)
        )
        .bright_black();

        aprint!("{}", line);
    }

    pub fn networks(records: &[NetworkRecord]) -> anyhow::Result<()> {
        let p = Self::get();
        for (idx, record) in records.iter().enumerate() {
            match p.q_level {
                2 => bail!("-qq is currently unimplemented"),
                _ => Self::network_tree(record, idx),
            }
            if idx + 1 != records.len() {
                aprint!();
            }
        }
        Ok(())
    }

    fn network_tree(record: &NetworkRecord, idx: usize) {
        Self::network_head(idx, record);
        let mut details: Vec<Detail> = vec![format::signal_to_detail(record)];

        if let Some(channel_detail) = format::channel_to_detail(&record.channel) {
            details.push(channel_detail);
        }

        if let Some(ht_detail) = format::ht_to_detail(&record.ht) {
            details.push(ht_detail);
        }

        details.push(format::security_to_detail(&record.security));

        as_tree(details);
    }

    fn network_head(idx: usize, record: &NetworkRecord) {
        let signal_string: String = format::signal_to_string(record);
        let signal_width: usize = signal_string.width();

        let block_width: usize = 16;
        let local_pad: usize = block_width.saturating_sub(signal_width);
        let right_part: String = format!("{}{}", " ".repeat(local_pad), signal_string);

        let left_part: String = format!("[{}] {}", idx, record.ssid);

        let used_width: usize = left_part.width() + block_width;

        let padding_len: usize = TOTAL_WIDTH.saturating_sub(used_width + 1);
        let padding: String = " ".repeat(padding_len);

        aprint!(
            "{} {}{}{}",
            format!("[{}]", idx.to_string().color(colors::ACCENT)).color(colors::SEPARATOR),
            record.ssid.color(colors::SSID),
            padding,
            right_part.color(format::signal_color(record))
        );
    }

    pub fn scan_summary(network_count: usize, total_time: Duration) {
        let p = Self::get();
        let in_range: ColoredString = format!("{network_count} networks in range")
            .bold()
            .green();
        let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
        let output: &ColoredString = &format!("Scan Complete: {in_range} found in {total_time}")
            .color(colors::TEXT_DEFAULT);

        match p.q_level {
            0 => {
                divider();
                centerln(output);
            }
            _ => {
                aprint!();
                success!("{output}")
            }
        }
    }

    pub fn no_results() {
        let p = Self::get();
        if p.q_level == 0 && !p.no_banner {
            Self::header("ZERO NETWORKS DETECTED");
            aprint!("{}", banner::NO_SIGNAL.red().bold());
            return;
        }
        aerial_common::error!("Scan completed: 0 networks in range.");
    }

    pub fn end_of_program() {
        let p = Self::get();
        if p.json || p.q_level > 0 {
            return;
        }
        aprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    }
}

pub fn divider() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    aprint!("{}", sep);
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    aprint!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    );
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    aprint!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
}

pub fn as_tree(details: Vec<(String, ColoredString)>) {
    let padding_width: usize = "Security".len();

    for (i, (key, value)) in details.iter().enumerate() {
        let last: bool = i + 1 == details.len();
        let branch: ColoredString = if !last { "├─" } else { "└─" }.bright_black();

        let dots_count: usize = padding_width.saturating_sub(key.len());
        let dots: ColoredString = ".".repeat(dots_count).color(colors::SEPARATOR);

        aprint!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots,
            ":".color(colors::SEPARATOR),
            value
        );
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat((TOTAL_WIDTH - console::measure_text_width(msg)) / 2);
    aprint!("{}{}{}", space, msg, space);
}
