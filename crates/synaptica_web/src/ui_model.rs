//! UI models and style helpers that should be available on both wasm and
//! native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! them on the host.

use std::time::Duration;

use synaptica::levels::ChangeDirection;
use synaptica::simulator::{Position, SimulationSettings};
use synaptica::DrugId;

/// Formats a percentage with one decimal place.
///
/// Float formatting is done through integers: core float-to-decimal
/// formatting has panicked on some wasm toolchain/browser combinations.
pub fn fmt_percent(v: f32) -> String {
    if !v.is_finite() {
        return "0%".to_string();
    }
    let tenths = (f64::from(v) * 10.0).round() as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    let (whole, frac) = (abs / 10, abs % 10);
    if frac == 0 {
        format!("{sign}{whole}%")
    } else {
        format!("{sign}{whole}.{frac}%")
    }
}

/// Absolute placement of a particle inside the synapse panel.
pub fn particle_style(pos: Position) -> String {
    format!("left: {}; top: {};", fmt_percent(pos.x), fmt_percent(pos.y))
}

/// Filled part of a comparison bar; `color` tints the bar when given.
pub fn bar_style(level: u8, color: Option<&str>) -> String {
    let width = level.min(100);
    match color {
        Some(c) => format!("width: {width}%; background: {c};"),
        None => format!("width: {width}%;"),
    }
}

pub fn dot_style(color: &str) -> String {
    format!("background-color: {color};")
}

pub fn badge_class(change: ChangeDirection) -> String {
    format!("badge badge-{}", change.badge_variant())
}

pub fn drug_card_class(selected: bool) -> &'static str {
    if selected {
        "drug-card selected"
    } else {
        "drug-card"
    }
}

pub fn drug_card_style(drug: DrugId, selected: bool) -> String {
    if selected {
        format!("border-color: {0}; box-shadow: 0 0 0 1px {0}55;", drug.accent())
    } else {
        String::new()
    }
}

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tab active"
    } else {
        "tab"
    }
}

pub fn play_button_icon(playing: bool) -> &'static str {
    if playing {
        "⏸"
    } else {
        "▶"
    }
}

pub fn play_button_title(playing: bool) -> &'static str {
    if playing {
        "Pausar"
    } else {
        "Reproducir"
    }
}

pub fn tick_period(settings: &SimulationSettings) -> Duration {
    Duration::from_millis(u64::from(settings.tick_interval_ms.max(1)))
}
