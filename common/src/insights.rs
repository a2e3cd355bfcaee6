// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use rand::seq::SliceRandom;
use rand::{Rng, rng};

/// Internal tool-specific operational guidance.
const WIFI_TIPS: &[&str] = &[
    "Retries only affect scan visibility, auth runs at most once",
    "Use --retry to wait longer for slow or congested beacons",
    "'-v' reveals the exact platform commands being issued",
    "'--json' emits machine-readable verdicts for scripting",
    "Disconnecting powers the radio back on, ready for the next join",
    "Hidden networks never show up in scan results",
];

/// Technical facts and networking trivia.
const TECH_TRIVIA: &[&str] = &[
    "Wi-Fi is a trademark, it was never short for Wireless Fidelity",
    "802.11 debuted in 1997 at a blistering 2 Mbit/s",
    "Microwave ovens and Bluetooth share the 2.4 GHz band",
    "Channel 14 is legal only in Japan, and only for 802.11b",
    "WEP was broken within a few years of shipping",
];

/// Industry jokes and developer humor.
const DEV_HUMOR: &[&str] = &[
    "The strongest signal is always in the room with the router",
    "It's not DNS. It can't be DNS. It was DNS",
    "Have you tried turning the radio off and on again?",
    "The best wifi password is the one taped to the router",
];

/// Generates a randomized list of UI messages.
///
/// Every slot in the resulting list has a 50% probability of being an
/// operational tip and a 50% probability of being flavor text (trivia/humor),
/// provided both pools still have remaining items.
pub fn get_shuffled_insights() -> Vec<&'static str> {
    let mut rng = rng();

    let mut tips = WIFI_TIPS.to_vec();
    tips.shuffle(&mut rng);

    let mut flavor: Vec<&str> = TECH_TRIVIA
        .iter()
        .chain(DEV_HUMOR.iter())
        .copied()
        .collect();
    flavor.shuffle(&mut rng);

    let total_len = tips.len() + flavor.len();
    let mut output = Vec::with_capacity(total_len);

    while !tips.is_empty() && !flavor.is_empty() {
        let pick_tip = rng.random_bool(0.5);
        if pick_tip {
            output.push(tips.remove(0));
        } else {
            output.push(flavor.remove(0));
        }
    }

    output.extend(tips);
    output.extend(flavor);
    output
}
