use std::collections::BTreeSet;
use std::fmt::Write as _;

use stgc_core::{gray_adjacent, GrayCode};

const RED: &str = "\u{1b}[91m";
const GREEN: &str = "\u{1b}[92m";
const YELLOW: &str = "\u{1b}[93m";
const CLEAR: &str = "\u{1b}[0m";

const DEGREE: char = '\u{00b0}';

struct Palette {
    good: &'static str,
    bad: &'static str,
    sensor: &'static str,
    clear: &'static str,
}

const ANSI: Palette = Palette {
    good: GREEN,
    bad: RED,
    sensor: YELLOW,
    clear: CLEAR,
};

const PLAIN: Palette = Palette {
    good: "",
    bad: "",
    sensor: "",
    clear: "",
};

/// Renders the per-offset reading table with ANSI colors.
///
/// Two precision lines (the single-track resolution `360/n` against the
/// plain `k`-sensor resolution `360/2^k`) are followed by one row per
/// offset: the zero-padded codeword, green when unique and
/// Gray-adjacent to its predecessor and red otherwise, then the rotated
/// track as seen under each position, sensor positions highlighted.
pub fn render(code: &GrayCode) -> String {
    render_with(code, &ANSI)
}

/// Renders the same table without escape sequences, for logs and tests.
pub fn render_plain(code: &GrayCode) -> String {
    render_with(code, &PLAIN)
}

fn render_with(code: &GrayCode, palette: &Palette) -> String {
    let track_len = code.track_len();
    let sensor_count = code.sensor_count();
    let readings = code.readings();

    let mut duplicates = BTreeSet::new();
    {
        let mut seen = BTreeSet::new();
        for &word in &readings {
            if !seen.insert(word) {
                duplicates.insert(word);
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Precision: {:.2}{DEGREE}",
        360.0 / track_len as f64
    );
    let _ = writeln!(
        out,
        "Not single track precision: {:.2}{DEGREE}",
        360.0 / (1u128 << sensor_count) as f64
    );

    let mut previous = readings[track_len - 1];
    for (offset, &word) in readings.iter().enumerate() {
        let ok = !duplicates.contains(&word) && gray_adjacent(word, previous);
        let color = if ok { palette.good } else { palette.bad };
        let _ = write!(
            out,
            "{color}{word:0width$b}{clear} ",
            width = sensor_count,
            clear = palette.clear
        );
        for position in 0..track_len {
            let bit = if code.sensor_active(position, offset) {
                '1'
            } else {
                '0'
            };
            if code.layout().contains(position) {
                let _ = write!(out, "{}{bit}{}", palette.sensor, palette.clear);
            } else {
                out.push(bit);
            }
        }
        out.push('\n');
        previous = word;
    }
    out
}
