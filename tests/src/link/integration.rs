// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::sync::atomic::Ordering;
use std::time::Duration;

use aerial_common::models::outcome::{CODE_SUCCESS, CODE_UNREACHABLE, ConnectOutcome};
use aerial_common::models::state::WifiState;
use aerial_core::adapter::{self, Platform};
use aerial_core::link::LinkService;
use aerial_core::probe::TcpProbe;

use crate::fakes::{ScriptedAdapter, ScriptedProbe};

fn service(adapter: ScriptedAdapter, probe: ScriptedProbe) -> LinkService {
    LinkService::new(Box::new(adapter), Box::new(probe)).with_settle(Duration::ZERO)
}

#[test]
fn full_connect_flow_reflects_in_current_connection() {
    let adapter = ScriptedAdapter::new(WifiState::On).with_scans(&[&[], &["HomeLab", "Guest"]]);
    let joins = adapter.join_counter();
    let service = service(adapter, ScriptedProbe::answering_in(Duration::from_millis(25)));

    let outcome: ConnectOutcome = service
        .connect("HomeLab", "hunter2", 3)
        .expect("adapter should not fail")
        .expect("a visible network must produce a verdict");

    assert_eq!(outcome.code, CODE_SUCCESS);
    assert_eq!(outcome.state, WifiState::Connected);
    assert_eq!(outcome.ping_cost, Some(Duration::from_millis(25)));
    assert_eq!(joins.load(Ordering::SeqCst), 1);

    let info = service
        .current_connection()
        .expect("query should pass through");
    assert_eq!(info.ssid, "HomeLab");
    assert!(info.is_associated());
}

#[test]
fn dead_radio_is_powered_up_before_scanning() {
    let adapter = ScriptedAdapter::new(WifiState::Off).with_scans(&[&["HomeLab"]]);
    let service = service(adapter, ScriptedProbe::answering_in(Duration::from_millis(9)));

    let outcome = service
        .connect("HomeLab", "hunter2", 2)
        .expect("adapter should not fail")
        .expect("a verdict");

    assert_eq!(outcome.code, CODE_SUCCESS);
    assert_eq!(
        service.power_state().expect("query should pass through"),
        WifiState::On
    );
}

#[test]
fn refusing_radio_fails_without_a_single_scan() {
    let adapter = ScriptedAdapter::new(WifiState::Off)
        .refusing_enable()
        .with_scans(&[&["HomeLab"]]);
    let joins = adapter.join_counter();
    let service = service(adapter, ScriptedProbe::silent());

    let outcome = service
        .connect("HomeLab", "hunter2", 2)
        .expect("adapter should not fail")
        .expect("a verdict");

    assert_eq!(outcome.state, WifiState::ConnectFailed);
    assert_eq!(joins.load(Ordering::SeqCst), 0);
}

#[test]
fn ghost_network_exhausts_retries_without_credentials() {
    let adapter = ScriptedAdapter::new(WifiState::On).with_scans(&[&["Guest"], &["Guest"]]);
    let joins = adapter.join_counter();
    let service = service(adapter, ScriptedProbe::silent());

    let outcome = service
        .connect("Ghost", "hunter2", 2)
        .expect("adapter should not fail");

    assert!(outcome.is_none());
    assert_eq!(joins.load(Ordering::SeqCst), 0);
}

#[test]
fn rejected_credentials_leave_no_association_behind() {
    let adapter = ScriptedAdapter::new(WifiState::On)
        .rejecting_joins()
        .with_scans(&[&["HomeLab"]]);
    let service = service(adapter, ScriptedProbe::answering_in(Duration::from_millis(9)));

    let outcome = service
        .connect("HomeLab", "wrong", 1)
        .expect("adapter should not fail")
        .expect("a verdict");

    assert_eq!(outcome.state, WifiState::ConnectFailed);
    assert!(
        !service
            .current_connection()
            .expect("query should pass through")
            .is_associated()
    );
}

#[test]
fn captive_link_reports_unreachable_but_stays_up() {
    let adapter = ScriptedAdapter::new(WifiState::On).with_scans(&[&["CafeWifi"]]);
    let service = service(adapter, ScriptedProbe::silent());

    let outcome = service
        .connect("CafeWifi", "latte", 1)
        .expect("adapter should not fail")
        .expect("a verdict");

    assert_eq!(outcome.code, CODE_UNREACHABLE);
    assert_eq!(outcome.state, WifiState::Connected);
    assert_eq!(
        service
            .current_connection()
            .expect("query should pass through")
            .ssid,
        "CafeWifi"
    );
}

#[test]
fn leaving_cuts_power_and_clears_the_association() {
    let adapter = ScriptedAdapter::new(WifiState::On).with_scans(&[&["HomeLab"]]);
    let service = service(adapter, ScriptedProbe::answering_in(Duration::from_millis(9)));

    service
        .connect("HomeLab", "hunter2", 1)
        .expect("adapter should not fail")
        .expect("a verdict");

    let verdict = service.leave().expect("adapter should not fail");
    assert_eq!(verdict, Some(WifiState::Disconnected));
    assert_eq!(
        service.power_state().expect("query should pass through"),
        WifiState::Off
    );
    assert!(
        !service
            .current_connection()
            .expect("query should pass through")
            .is_associated()
    );

    assert!(service.power_on().expect("adapter should not fail"));
    assert_eq!(
        service.power_state().expect("query should pass through"),
        WifiState::On
    );
}

/// Smoke test against the host machine. Most CI boxes have no wireless
/// stack, so a failing platform query downgrades to a skip.
#[test]
fn live_adapter_answers_or_is_absent() {
    let adapter = adapter::create_adapter(Platform::detect());
    let service = LinkService::new(adapter, Box::new(TcpProbe::new()));

    match service.power_state() {
        Ok(state) => {
            println!("Live radio reports {state}");
            let interface = service.interface_name().unwrap_or_default();
            println!("Wireless interface: {interface:?}");
        }
        Err(e) => {
            eprintln!("Skipping live smoke test: {e}");
        }
    }
}
