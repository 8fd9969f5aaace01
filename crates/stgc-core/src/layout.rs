use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::code::Codeword;
use crate::errors::{ErrorInfo, StgcError};

/// Ordered set of fixed angular sensor positions over a track length.
///
/// Order is significant: the first position contributes the
/// most-significant bit of every [`Codeword`] read from the track.
/// Layouts are immutable once constructed and every construction check
/// fails fast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorLayout {
    positions: Box<[usize]>,
    track_len: usize,
}

impl SensorLayout {
    /// Creates a layout after validating every position.
    ///
    /// Positions must be distinct and in `[0, track_len)`, and at most
    /// [`Codeword::BITS`] sensors can contribute to a codeword.
    pub fn new(positions: impl Into<Vec<usize>>, track_len: usize) -> Result<Self, StgcError> {
        let positions: Vec<usize> = positions.into();
        if track_len == 0 {
            let info = ErrorInfo::new("zero-track-length", "track length must be positive");
            return Err(StgcError::Layout(info));
        }
        if positions.is_empty() {
            let info = ErrorInfo::new("empty-layout", "a layout requires at least one sensor");
            return Err(StgcError::Layout(info));
        }
        if positions.len() > Codeword::BITS as usize {
            let info = ErrorInfo::new(
                "codeword-overflow",
                "layout has more sensors than codeword bits",
            )
            .with_context("sensor_count", positions.len().to_string())
            .with_context("codeword_bits", Codeword::BITS.to_string());
            return Err(StgcError::Layout(info));
        }
        let mut seen = BTreeSet::new();
        for &position in &positions {
            if position >= track_len {
                let info = ErrorInfo::new(
                    "position-out-of-range",
                    "sensor position is outside the track",
                )
                .with_context("position", position.to_string())
                .with_context("track_len", track_len.to_string());
                return Err(StgcError::Layout(info));
            }
            if !seen.insert(position) {
                let info = ErrorInfo::new("duplicate-position", "sensor positions must be distinct")
                    .with_context("position", position.to_string());
                return Err(StgcError::Layout(info));
            }
        }
        Ok(Self {
            positions: positions.into_boxed_slice(),
            track_len,
        })
    }

    /// Sensor positions in layout order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of sensors in the layout.
    pub fn sensor_count(&self) -> usize {
        self.positions.len()
    }

    /// Track length the positions index into.
    pub fn track_len(&self) -> usize {
        self.track_len
    }

    /// Whether the given position carries a sensor.
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }
}
