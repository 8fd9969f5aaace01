use crate::errors::{ErrorInfo, StgcError};
use crate::layout::SensorLayout;
use crate::track::Track;

/// Value read from all sensors at one rotational offset.
pub type Codeword = u64;

/// A candidate pairing of a [`Track`] and a [`SensorLayout`].
///
/// Candidates are immutable. Whether the pairing actually is a
/// single-track Gray code is decided by [`crate::validate::is_valid`];
/// consumers that only render or tabulate use the pure accessors here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayCode {
    layout: SensorLayout,
    track: Track,
}

impl GrayCode {
    /// Pairs a layout with a track of the matching length.
    pub fn new(layout: SensorLayout, track: Track) -> Result<Self, StgcError> {
        if layout.track_len() != track.len() {
            let info = ErrorInfo::new(
                "track-length-mismatch",
                "layout and track disagree on the track length",
            )
            .with_context("layout_track_len", layout.track_len().to_string())
            .with_context("track_len", track.len().to_string());
            return Err(StgcError::Layout(info));
        }
        Ok(Self { layout, track })
    }

    /// Number of angular positions on the track.
    pub fn track_len(&self) -> usize {
        self.track.len()
    }

    /// Number of sensors reading the track.
    pub fn sensor_count(&self) -> usize {
        self.layout.sensor_count()
    }

    /// The sensor layout of the candidate.
    pub fn layout(&self) -> &SensorLayout {
        &self.layout
    }

    /// The bit track of the candidate.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Codeword read by all sensors with the track rotated by `offset`.
    ///
    /// The first sensor in layout order contributes the most-significant
    /// bit. The offset is reduced modulo the track length, so any offset
    /// is accepted.
    pub fn reading(&self, offset: usize) -> Codeword {
        let track_len = self.track.len();
        let offset = offset % track_len;
        let mut word: Codeword = 0;
        for &position in self.layout.positions() {
            word <<= 1;
            if self.track.bit((position + offset) % track_len) {
                word |= 1;
            }
        }
        word
    }

    /// Whether the bit under `position` is set with the track rotated by
    /// `offset`.
    ///
    /// Used by rendering collaborators; `position` need not carry a
    /// sensor.
    pub fn sensor_active(&self, position: usize, offset: usize) -> bool {
        let track_len = self.track.len();
        self.track.bit((position + offset) % track_len)
    }

    /// The full reading table for offsets `0..track_len`.
    pub fn readings(&self) -> Vec<Codeword> {
        (0..self.track.len()).map(|offset| self.reading(offset)).collect()
    }
}
