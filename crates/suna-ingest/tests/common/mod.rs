//! Synthetic SUNA log fixtures.

#![allow(dead_code)]

use suna_model::SPECTRAL_CHANNEL_COUNT;

/// One instrument frame (no logger prefix) with 286 comma fields.
///
/// `index` varies the time of day and the spectral counts so frames can be
/// told apart after decoding. Every 10th frame is a dark frame.
pub fn instrument_frame(index: usize) -> String {
    let marker = if index % 10 == 9 { "SATSDF" } else { "SATSLF" };
    frame(marker, index)
}

/// A logger-relayed frame: `date time` prefix followed by a light frame.
pub fn dcl_line(index: usize) -> String {
    let seconds = index * 7;
    format!(
        "2014/08/10 {:02}:{:02}:{:02}.505 {}",
        seconds / 3600 % 24,
        seconds / 60 % 60,
        seconds % 60,
        frame("SATSLF", index)
    )
}

/// Decimal hour written into frame `index`.
pub fn hours_for(index: usize) -> f64 {
    (index as f64 * 0.125) % 24.0
}

fn frame(marker: &str, index: usize) -> String {
    let mut fields: Vec<String> = vec![
        format!("{marker}0345"),
        "2014221".to_string(),
        format!("{:.6}", hours_for(index)),
    ];
    fields.extend(
        [
            "17.23", "0.2413", "0.3512", "0.0834", "0.00", "12", "575", "1",
        ]
        .map(String::from),
    );
    fields.extend((0..SPECTRAL_CHANNEL_COUNT).map(|ch| (500 + (ch * 7 + index) % 300).to_string()));
    fields.extend(
        [
            "15.43", "14.11", "18.20", "41234", "8.1", "12.05", "11.71", "5.01", "0.32", "0.91",
            "0.84", "-0.002", "0.0011", "0.000731",
        ]
        .map(String::from),
    );
    // unused CTD columns
    fields.extend(std::iter::repeat_n(String::new(), 4));
    fields.push("171".to_string());
    fields.join(",")
}

/// Ways a line gets damaged in the field.
#[derive(Debug, Clone, Copy)]
pub enum Corruption {
    /// Cut off mid-line.
    Truncated,
    /// A stray delimiter.
    ExtraField,
    /// Frame marker overwritten.
    LostMarker,
    /// Nothing but noise.
    Noise,
}

pub fn corrupt(line: &str, corruption: Corruption) -> String {
    match corruption {
        Corruption::Truncated => line[..line.len() / 2].to_string(),
        Corruption::ExtraField => line.replacen(",17.23,", ",17.23,,", 1),
        Corruption::LostMarker => line.replacen("SATS", "S@TS", 1),
        Corruption::Noise => "\u{0}\u{0}~~ SUNA reboot ~~".to_string(),
    }
}

const CORRUPTIONS: [Corruption; 4] = [
    Corruption::Truncated,
    Corruption::ExtraField,
    Corruption::LostMarker,
    Corruption::Noise,
];

/// `count` logger lines.
pub fn dcl_log(count: usize) -> Vec<String> {
    (0..count).map(dcl_line).collect()
}

/// `count` logger lines with the ones at `bad` damaged, cycling through
/// every corruption kind.
pub fn dcl_log_with_corruption(count: usize, bad: &[usize]) -> Vec<String> {
    damage((0..count).map(dcl_line).collect(), bad)
}

/// `count` instrument frames.
pub fn instrument_log(count: usize) -> Vec<String> {
    (0..count).map(instrument_frame).collect()
}

pub fn instrument_log_with_corruption(count: usize, bad: &[usize]) -> Vec<String> {
    damage((0..count).map(instrument_frame).collect(), bad)
}

fn damage(mut lines: Vec<String>, bad: &[usize]) -> Vec<String> {
    for (n, &index) in bad.iter().enumerate() {
        lines[index] = corrupt(&lines[index], CORRUPTIONS[n % CORRUPTIONS.len()]);
    }
    lines
}
