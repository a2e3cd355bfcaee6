// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Thin wrappers around the 'tracing' crate.
//! Every other module logs through these macros instead of using
//! tracing directly, so the logging backend can be swapped without
//! touching call sites. The `status` field drives the symbol each
//! line gets in the terminal formatter.

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        tracing::info!(status = "info", $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        tracing::info!(status = "success", $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        tracing::debug!(status = "debug", $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        tracing::error!(status = "error", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        tracing::warn!(status = "warn", $($arg)+)
    };
}
