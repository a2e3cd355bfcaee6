// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use crate::aprint;
use crate::terminal::{colors, print};
use colored::*;
use unicode_width::UnicodeWidthStr;

const AERIAL: &str = r" █████╗ ███████╗██████╗ ██╗ █████╗ ██╗
██╔══██╗██╔════╝██╔══██╗██║██╔══██╗██║
███████║█████╗  ██████╔╝██║███████║██║
██╔══██║██╔══╝  ██╔══██╗██║██╔══██║██║
██║  ██║███████╗██║  ██║██║██║  ██║███████╗
╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝╚═╝╚═╝  ╚═╝╚══════╝";

pub const NO_SIGNAL: &str = r" _  _   ___      ___  ___   ___  _  _    _    _
| \| | / _ \    / __||_ _| / __|| \| |  /_\  | |
| .` || (_) |   \__ \ | | | (_ || .` | / _ \ | |__
|_|\_| \___/    |___/|___| \___||_|\_|/_/ \_\|____|";

pub fn print() {
    let width: usize = AERIAL
        .lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);
    let pad: String = " ".repeat(print::TOTAL_WIDTH.saturating_sub(width) / 2);
    for line in AERIAL.lines() {
        aprint!("{pad}{}", line.color(colors::SECONDARY));
    }
}
