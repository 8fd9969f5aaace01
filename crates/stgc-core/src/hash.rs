use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::code::GrayCode;
use crate::errors::{ErrorInfo, StgcError};

/// Computes the canonical structural hash for a candidate.
///
/// The digest covers the track length, the ordered sensor positions, and
/// the position bits, each section length-prefixed, so equal candidates
/// hash equally regardless of how they were constructed.
pub fn canonical_code_hash(code: &GrayCode) -> String {
    let mut hasher = Sha256::new();
    hasher.update((code.track_len() as u64).to_le_bytes());
    let positions = code.layout().positions();
    hasher.update((positions.len() as u64).to_le_bytes());
    for &position in positions {
        hasher.update((position as u64).to_le_bytes());
    }
    for index in 0..code.track_len() {
        hasher.update([u8::from(code.track().bit(index))]);
    }
    format!("{:x}", hasher.finalize())
}

/// Computes a stable hexadecimal hash for the provided serializable
/// payload via its canonical JSON encoding.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, StgcError> {
    let bytes = serde_json::to_vec(value)
        .map_err(|err| StgcError::Record(ErrorInfo::new("hash-encode", err.to_string())))?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{digest:x}"))
}
