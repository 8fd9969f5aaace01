use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::code::GrayCode;
use crate::errors::{ErrorInfo, StgcError};
use crate::layout::SensorLayout;
use crate::track::Track;

/// Persisted record shape: ordered sensor positions plus the track as a
/// most-significant-bit-first binary string. Deserializing and
/// re-serializing a record reproduces the identical `sensors` list and
/// the identical track string, leading zeros included.
#[derive(Debug, Serialize, Deserialize)]
struct CodeRecord {
    sensors: Vec<u64>,
    track: Track,
}

impl CodeRecord {
    fn from_code(code: &GrayCode) -> Self {
        Self {
            sensors: code
                .layout()
                .positions()
                .iter()
                .map(|&position| position as u64)
                .collect(),
            track: code.track().clone(),
        }
    }

    fn into_code(self) -> Result<GrayCode, StgcError> {
        let track_len = self.track.len();
        let mut positions = Vec::with_capacity(self.sensors.len());
        for &raw in &self.sensors {
            let position = usize::try_from(raw).map_err(|_| {
                StgcError::Record(
                    ErrorInfo::new("position-overflow", "sensor position does not fit in usize")
                        .with_context("position", raw.to_string()),
                )
            })?;
            positions.push(position);
        }
        let layout = SensorLayout::new(positions, track_len)?;
        GrayCode::new(layout, self.track)
    }
}

/// Serializes the candidate to the pretty JSON record format.
pub fn code_to_json(code: &GrayCode) -> Result<String, StgcError> {
    serde_json::to_string_pretty(&CodeRecord::from_code(code))
        .map_err(|err| StgcError::Record(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a candidate from a JSON record.
///
/// Shape and type errors surface as the Record family; the layout
/// constructor checks re-apply afterwards and surface as the Layout
/// family.
pub fn code_from_json(json: &str) -> Result<GrayCode, StgcError> {
    let record: CodeRecord = serde_json::from_str(json)
        .map_err(|err| StgcError::Record(ErrorInfo::new("deserialize-json", err.to_string())))?;
    record.into_code()
}

/// Serializes the candidate to a compact binary record using `bincode`.
pub fn code_to_bytes(code: &GrayCode) -> Result<Vec<u8>, StgcError> {
    bincode::serialize(&CodeRecord::from_code(code))
        .map_err(|err| StgcError::Record(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a candidate from its binary record.
pub fn code_from_bytes(bytes: &[u8]) -> Result<GrayCode, StgcError> {
    let record: CodeRecord = bincode::deserialize(bytes)
        .map_err(|err| StgcError::Record(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    record.into_code()
}

impl Serialize for GrayCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CodeRecord::from_code(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GrayCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = CodeRecord::deserialize(deserializer)?;
        record.into_code().map_err(DeError::custom)
    }
}
