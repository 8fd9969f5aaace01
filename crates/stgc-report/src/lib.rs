#![deny(missing_docs)]
#![doc = "Presentation collaborators for discovered single-track Gray codes: terminal rendering, lookup tables and Markdown galleries, and a JSON record archive. Validity is never decided here; everything reads through the pure core accessors."]

/// Record archive: timestamped saves, loads, directory scans, gallery
/// generation.
pub mod archive;
/// Terminal rendering of a configuration's reading table.
pub mod display;
/// Lookup tables and Markdown gallery output.
pub mod table;

pub use archive::{load_record, save_record, scan_records, write_gallery};
pub use display::{render, render_plain};
pub use table::{gallery_markdown, position_lookup, GalleryEntry};
