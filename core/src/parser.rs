// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Text parsing for platform wireless utility output.
//!
//! Every adapter funnels raw command output through this module, so the
//! layers above never see platform text. Parsers are total: malformed input
//! yields empty fields or skipped rows, never an error.
//!
//! - **airport** (mac): whitespace-aligned key/value and column output.
//! - **nmcli** (Linux): terse colon-separated output with `\:` escapes.
//! - **netsh** (Windows): indented key/value blocks.

use aerial_common::models::link::ConnectionInfo;
use aerial_common::models::network::NetworkRecord;

/// Splits raw text into trimmed `(key, value)` pairs.
///
/// Each line is split on the **first** `:`; lines without one are dropped.
/// Values keep any further colons, which matters for MAC addresses and
/// `HH:MM:SS` style values.
pub fn key_value_lines(raw: &str) -> Vec<(String, String)> {
    raw.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Parses `airport -I` output into a [`ConnectionInfo`].
///
/// Known keys are projected onto named fields, everything else is kept in
/// `extras`. Duplicate keys overwrite earlier occurrences. Keys the output
/// never mentions stay empty.
pub fn parse_current(raw: &str) -> ConnectionInfo {
    let mut info = ConnectionInfo::default();
    for (key, value) in key_value_lines(raw) {
        match key.as_str() {
            "SSID" => info.ssid = value,
            "agrCtlRSSI" => info.signal = value,
            "agrCtlNoise" => info.noise = value,
            "state" => info.state = value,
            "op mode" => info.mode = value,
            "lastTxRate" => info.tx_rate = value,
            "maxRate" => info.max_rate = value,
            "802.11 auth" => info.auth = value,
            "link auth" => info.security = value,
            "MCS" => info.mcs = value,
            "guardInterval" => info.guard_interval = value,
            "channel" => info.channel = value,
            "NSS" => info.nss = value,
            _ => {
                info.extras.insert(key, value);
            }
        }
    }
    info
}

/// Parses `airport -s` output into scan records.
///
/// The first line is the column header and is dropped, as are blank lines.
/// Each data line is stripped, has the literal `--` placeholder removed,
/// and is split on runs of two or more whitespace characters into the
/// positional columns `{ssid, signal, channel, ht, security}`. Rows that
/// produce fewer than five columns are skipped; scan output is noisy and
/// one bad row must not sink the rest.
pub fn parse_scan(raw: &str) -> Vec<NetworkRecord> {
    raw.lines()
        .skip(1)
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let fields: Vec<String> = split_columns(&line.replace("--", ""));
            if fields.len() < 5 {
                return None;
            }
            Some(NetworkRecord {
                ssid: fields[0].clone(),
                signal: fields[1].clone(),
                channel: fields[2].clone(),
                ht: fields[3].clone(),
                security: fields[4].clone(),
            })
        })
        .collect()
}

/// Splits on runs of two or more whitespace characters.
///
/// A single space stays inside a field. A trailing delimiter run produces
/// a trailing empty field, which is how an open network (its `--` security
/// placeholder stripped to nothing) still yields five columns.
fn split_columns(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut spaces: usize = 0;

    for ch in line.chars() {
        if ch.is_whitespace() {
            spaces += 1;
            continue;
        }
        if spaces >= 2 {
            fields.push(std::mem::take(&mut current));
        } else if spaces == 1 {
            current.push(' ');
        }
        spaces = 0;
        current.push(ch);
    }

    if spaces >= 2 {
        fields.push(std::mem::take(&mut current));
        fields.push(String::new());
    } else {
        fields.push(current);
    }
    fields
}

/// Splits one line of `nmcli -t` output, honoring `\:` escapes.
fn split_terse(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Parses `nmcli -t -f SSID,SIGNAL,CHAN,SECURITY dev wifi list` output.
///
/// Hidden networks report an empty SSID and are dropped. The `--` empty
/// marker nmcli uses in some columns is normalized to an empty string.
pub fn parse_nmcli_scan(raw: &str) -> Vec<NetworkRecord> {
    raw.lines()
        .filter_map(|line| {
            let fields: Vec<String> = split_terse(line);
            if fields.len() < 4 {
                return None;
            }
            let ssid = clear_empty_marker(&fields[0]);
            if ssid.trim().is_empty() {
                return None;
            }
            Some(NetworkRecord {
                ssid,
                signal: fields[1].clone(),
                channel: fields[2].clone(),
                ht: String::new(),
                security: clear_empty_marker(&fields[3]),
            })
        })
        .collect()
}

/// Parses `nmcli dev show <interface>` output into a [`ConnectionInfo`].
pub fn parse_nmcli_current(raw: &str) -> ConnectionInfo {
    let mut info = ConnectionInfo::default();
    for (key, value) in key_value_lines(raw) {
        let value = clear_empty_marker(&value);
        match key.as_str() {
            "GENERAL.CONNECTION" => info.ssid = value,
            "GENERAL.STATE" => info.state = value,
            "GENERAL.TYPE" => info.mode = value,
            _ => {
                info.extras.insert(key, value);
            }
        }
    }
    info
}

/// Finds the first wifi device in `nmcli -t -f DEVICE,TYPE dev` output.
pub fn parse_nmcli_devices(raw: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        let fields: Vec<String> = split_terse(line);
        if fields.len() >= 2 && fields[1] == "wifi" {
            Some(fields[0].clone())
        } else {
            None
        }
    })
}

fn clear_empty_marker(value: &str) -> String {
    if value == "--" {
        String::new()
    } else {
        value.to_string()
    }
}

/// Parses `netsh wlan show interfaces` output into a [`ConnectionInfo`].
pub fn parse_netsh_current(raw: &str) -> ConnectionInfo {
    let mut info = ConnectionInfo::default();
    for (key, value) in key_value_lines(raw) {
        match key.as_str() {
            "SSID" => info.ssid = value,
            "State" => info.state = value,
            "Signal" => info.signal = value,
            "Authentication" => info.auth = value,
            "Cipher" => info.security = value,
            "Channel" => info.channel = value,
            "Radio type" => info.mode = value,
            "Receive rate (Mbps)" => info.max_rate = value,
            "Transmit rate (Mbps)" => info.tx_rate = value,
            _ => {
                info.extras.insert(key, value);
            }
        }
    }
    info
}

/// Finds the interface name in `netsh wlan show interfaces` output.
pub fn parse_netsh_interface_name(raw: &str) -> Option<String> {
    key_value_lines(raw)
        .into_iter()
        .find(|(key, _)| key == "Name")
        .map(|(_, value)| value)
}

/// Parses `netsh wlan show networks` output into scan records.
///
/// A key of the form `SSID <n>` opens a block; attribute lines below it
/// fill in the record until the next `SSID` key or end of input. Blocks
/// with an empty SSID (hidden networks) are dropped.
pub fn parse_netsh_networks(raw: &str) -> Vec<NetworkRecord> {
    let mut records: Vec<NetworkRecord> = Vec::new();
    let mut current: Option<NetworkRecord> = None;

    for (key, value) in key_value_lines(raw) {
        if key.starts_with("SSID ") {
            push_named(&mut records, current.take());
            current = Some(NetworkRecord {
                ssid: value,
                signal: String::new(),
                channel: String::new(),
                ht: String::new(),
                security: String::new(),
            });
            continue;
        }
        let Some(record) = current.as_mut() else {
            continue;
        };
        match key.as_str() {
            "Authentication" => record.security = value,
            "Signal" => record.signal = value,
            "Channel" => record.channel = value,
            "Radio type" => record.ht = value,
            _ => {}
        }
    }

    push_named(&mut records, current.take());
    records
}

fn push_named(records: &mut Vec<NetworkRecord>, record: Option<NetworkRecord>) {
    if let Some(record) = record
        && !record.ssid.trim().is_empty()
    {
        records.push(record);
    }
}

/// Finds the wireless device in `networksetup -listallhardwareports` output.
///
/// The output lists each port as a `Hardware Port:` line followed by its
/// `Device:` line. The wireless port is named `Wi-Fi` on current systems
/// and `AirPort` on older ones.
pub fn parse_hardware_ports(raw: &str) -> Option<String> {
    let mut in_wireless_port = false;
    for (key, value) in key_value_lines(raw) {
        match key.as_str() {
            "Hardware Port" => {
                in_wireless_port = value.contains("Wi-Fi") || value.contains("AirPort");
            }
            "Device" if in_wireless_port => return Some(value),
            _ => {}
        }
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
