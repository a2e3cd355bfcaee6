use crate::terminal::colors;
use aerial_common::models::link::{ConnectionInfo, LinkState};
use aerial_common::models::network::NetworkRecord;
use colored::*;

/// Picks a quality color for a parsed signal reading. Negative readings
/// are treated as dBm, everything else as a percentage.
pub fn strength_color(value: Option<i32>) -> Color {
    let Some(v) = value else {
        return colors::TEXT_DEFAULT;
    };
    if v < 0 {
        return match v {
            v if v >= -60 => colors::SIGNAL_STRONG,
            v if v >= -75 => colors::SIGNAL_OK,
            _ => colors::SIGNAL_WEAK,
        };
    }
    match v {
        v if v >= 66 => colors::SIGNAL_STRONG,
        v if v >= 33 => colors::SIGNAL_OK,
        _ => colors::SIGNAL_WEAK,
    }
}

pub fn signal_color(record: &NetworkRecord) -> Color {
    strength_color(record.signal_value())
}

pub fn signal_to_string(record: &NetworkRecord) -> String {
    match signal_display(&record.signal) {
        Some(signal) => format!("⌁ {signal}"),
        None => String::new(),
    }
}

pub fn signal_to_detail(record: &NetworkRecord) -> (String, ColoredString) {
    let value: ColoredString = match signal_display(&record.signal) {
        Some(signal) => signal.color(signal_color(record)),
        None => "?".dimmed(),
    };
    (String::from("Signal"), value)
}

pub fn channel_to_detail(channel: &str) -> Option<(String, ColoredString)> {
    let channel = channel.trim();
    if channel.is_empty() {
        return None;
    }
    Some((String::from("Channel"), channel.color(colors::CHANNEL)))
}

pub fn ht_to_detail(ht: &str) -> Option<(String, ColoredString)> {
    let ht = ht.trim();
    if ht.is_empty() {
        return None;
    }
    Some((String::from("HT"), ht.color(colors::SECONDARY)))
}

pub fn security_to_detail(security: &str) -> (String, ColoredString) {
    let security = security.trim();
    let value: ColoredString = if security.is_empty() {
        "open".italic().dimmed()
    } else {
        security.color(colors::SECURITY)
    };
    (String::from("Security"), value)
}

pub fn state_to_colored(info: &ConnectionInfo) -> ColoredString {
    let token = info.state.trim();
    match info.link_state() {
        LinkState::Running => token.green().bold(),
        LinkState::Unknown => "unknown".dimmed(),
        LinkState::Other => token.yellow(),
    }
}

/// Flattens the named link attributes into renderable rows, skipping
/// whatever the platform did not report.
pub fn connection_to_details(info: &ConnectionInfo) -> Vec<(String, ColoredString)> {
    let mut details: Vec<(String, ColoredString)> = Vec::new();

    if !info.state.trim().is_empty() {
        details.push((String::from("State"), state_to_colored(info)));
    }
    if let Some(signal) = signal_display(&info.signal) {
        details.push((
            String::from("Signal"),
            signal.color(strength_color(info.signal_value())),
        ));
    }
    push_raw(&mut details, "Noise", &info.noise, colors::TEXT_DEFAULT);
    push_raw(&mut details, "Channel", &info.channel, colors::CHANNEL);
    push_raw(&mut details, "Mode", &info.mode, colors::SECONDARY);
    push_raw(&mut details, "Tx Rate", &info.tx_rate, colors::TEXT_DEFAULT);
    push_raw(&mut details, "Max Rate", &info.max_rate, colors::TEXT_DEFAULT);
    push_raw(&mut details, "Auth", &info.auth, colors::SECURITY);
    push_raw(&mut details, "Security", &info.security, colors::SECURITY);
    push_raw(&mut details, "MCS", &info.mcs, colors::TEXT_DEFAULT);
    push_raw(&mut details, "Guard", &info.guard_interval, colors::TEXT_DEFAULT);
    push_raw(&mut details, "NSS", &info.nss, colors::TEXT_DEFAULT);

    details
}

fn push_raw(details: &mut Vec<(String, ColoredString)>, key: &str, value: &str, color: Color) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    details.push((key.to_string(), value.color(color)));
}

fn signal_display(signal: &str) -> Option<String> {
    let raw = signal.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed: Option<i32> = raw.trim_end_matches('%').trim().parse().ok();
    match parsed {
        Some(v) if v < 0 => Some(format!("{v} dBm")),
        Some(v) => Some(format!("{v}%")),
        None => Some(raw.to_string()),
    }
}
