use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use globset::Glob;
use walkdir::WalkDir;

use stgc_core::errors::{ErrorInfo, StgcError};
use stgc_core::{code_from_json, code_to_json, GrayCode};

use crate::table::{gallery_markdown, GalleryEntry};

fn io_error(code: &str, path: &Path, err: io::Error) -> StgcError {
    StgcError::Report(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Writes the candidate's JSON record into the directory.
///
/// The filename is `{k}S_{n}T_{UTC timestamp}.json`, so successive saves
/// of different configurations sort by sensor count and track length.
pub fn save_record(code: &GrayCode, dir: &Path) -> Result<PathBuf, StgcError> {
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let name = format!(
        "{}S_{}T_{stamp}.json",
        code.sensor_count(),
        code.track_len()
    );
    let path = dir.join(name);
    let json = code_to_json(code)?;
    fs::write(&path, json).map_err(|err| io_error("write-record", &path, err))?;
    Ok(path)
}

/// Loads one JSON record from disk.
pub fn load_record(path: &Path) -> Result<GrayCode, StgcError> {
    let json = fs::read_to_string(path).map_err(|err| io_error("read-record", path, err))?;
    code_from_json(&json)
}

/// Loads every `*.json` record directly inside the directory, in
/// deterministic path order.
pub fn scan_records(dir: &Path) -> Result<Vec<(PathBuf, GrayCode)>, StgcError> {
    let matcher = Glob::new("*.json")
        .map_err(|err| StgcError::Report(ErrorInfo::new("record-glob", err.to_string())))?
        .compile_matcher();
    let mut records = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            StgcError::Report(
                ErrorInfo::new("scan-records", err.to_string())
                    .with_context("path", dir.display().to_string()),
            )
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !matcher.is_match(entry.file_name()) {
            continue;
        }
        let code = load_record(entry.path())?;
        records.push((entry.path().to_path_buf(), code));
    }
    Ok(records)
}

/// Scans the directory for records and writes its `README.md` gallery.
///
/// A record links its visualization when a sibling file with the same
/// stem and a `.gif` extension exists.
pub fn write_gallery(dir: &Path) -> Result<PathBuf, StgcError> {
    let entries: Vec<GalleryEntry> = scan_records(dir)?
        .into_iter()
        .map(|(path, code)| {
            let image_path = path.with_extension("gif");
            let image = image_path
                .exists()
                .then(|| image_path.file_name())
                .flatten()
                .map(|name| name.to_string_lossy().into_owned());
            GalleryEntry { image, code }
        })
        .collect();
    let markdown = gallery_markdown(&entries);
    let path = dir.join("README.md");
    fs::write(&path, markdown).map_err(|err| io_error("write-gallery", &path, err))?;
    Ok(path)
}
