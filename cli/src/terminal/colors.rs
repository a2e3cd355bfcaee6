// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::Color;

// General Purpose
pub const TEXT_DEFAULT: Color = Color::TrueColor {
    r: 212,
    g: 212,
    b: 212,
}; // Very Light Gray

pub const SEPARATOR: Color = Color::BrightBlack;

pub const PRIMARY: Color = Color::TrueColor {
    r: 255,
    g: 204,
    b: 102,
}; // Soft Gold/Amber

pub const SECONDARY: Color = Color::TrueColor {
    r: 102,
    g: 204,
    b: 255,
}; // Soft Sky Blue

pub const ACCENT: Color = Color::TrueColor {
    r: 170,
    g: 170,
    b: 0,
};

// Wireless: Identifiers
pub const SSID: Color = Color::TrueColor {
    r: 102,
    g: 255,
    b: 204,
}; // Bright Mint/Teal

pub const CHANNEL: Color = Color::TrueColor {
    r: 190,
    g: 255,
    b: 190,
}; // Lighter Pale Lime Green

// Wireless: Signal Quality (Green Through Pink)
pub const SIGNAL_STRONG: Color = Color::TrueColor {
    r: 170,
    g: 255,
    b: 170,
}; // Pale Lime Green

pub const SIGNAL_OK: Color = Color::TrueColor {
    r: 255,
    g: 221,
    b: 128,
}; // Warm Sand

pub const SIGNAL_WEAK: Color = Color::TrueColor {
    r: 255,
    g: 102,
    b: 178,
}; // Soft Raspberry Pink

// Wireless: Distinct
pub const SECURITY: Color = Color::TrueColor {
    r: 255,
    g: 165,
    b: 0,
}; // Soft Orange
