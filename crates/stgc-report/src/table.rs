use std::collections::BTreeMap;
use std::fmt::Write as _;

use stgc_core::{Codeword, GrayCode};

/// Codeword-to-offset lookup table for decoding sensor readings back to
/// angular positions.
///
/// For a valid single-track Gray code every reading maps to exactly one
/// offset; for an invalid candidate later offsets overwrite earlier
/// ones, which batch consumers must not rely on.
pub fn position_lookup(code: &GrayCode) -> BTreeMap<Codeword, usize> {
    let mut lookup = BTreeMap::new();
    for offset in 0..code.track_len() {
        lookup.insert(code.reading(offset), offset);
    }
    lookup
}

/// One row of the example gallery.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    /// Optional visualization file linked from the row.
    pub image: Option<String>,
    /// The configuration the row describes.
    pub code: GrayCode,
}

/// Builds the Markdown gallery table for a batch of configurations.
///
/// Columns: visualization link, sensor positions, track string, and the
/// codeword-to-position lookup table.
pub fn gallery_markdown(entries: &[GalleryEntry]) -> String {
    let mut out = String::from("# Example Single Track Gray Codes\n");
    out.push_str("| Visualization | Sensor Positions | Track | Position Lookup Table |\n");
    out.push_str("| ---- | ---- | ---- | ---- |\n");
    for entry in entries {
        let code = &entry.code;
        let image = match &entry.image {
            Some(name) => {
                format!("<img src=\"{name}\" alt=\"Animation\" width=\"400\" height=\"400\">")
            }
            None => "(none)".to_string(),
        };
        let sensors = code
            .layout()
            .positions()
            .iter()
            .map(|position| position.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let lookup = position_lookup(code)
            .into_iter()
            .map(|(word, offset)| {
                format!("{word:0width$b} = {offset}", width = code.sensor_count())
            })
            .collect::<Vec<_>>()
            .join("<br>");
        let _ = writeln!(
            out,
            "| {image} | {sensors} | {track} | {lookup} |",
            track = code.track()
        );
    }
    out
}
