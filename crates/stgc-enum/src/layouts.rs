use stgc_core::errors::{ErrorInfo, StgcError};
use stgc_core::{Codeword, SensorLayout};

/// Enumerates every canonical sensor layout of a given size over a
/// track length.
///
/// Any layout is equivalent under rotation to one containing position
/// zero, so position zero is fixed as the first sensor and the
/// remaining `sensor_count - 1` positions sweep the combinations of
/// `{1, …, track_len - 1}` in lexicographic order. This removes the
/// `track_len`-fold rotational duplication from layout search.
#[derive(Debug, Clone)]
pub struct SensorLayouts {
    track_len: usize,
    tail: Vec<usize>,
    done: bool,
}

impl SensorLayouts {
    /// Starts a fresh enumeration.
    ///
    /// Fails fast on a zero sensor count, a zero track length, or more
    /// sensors than codeword bits. A sensor count that exceeds the
    /// available positions produces an empty (not erroneous)
    /// enumeration.
    pub fn new(sensor_count: usize, track_len: usize) -> Result<Self, StgcError> {
        if sensor_count == 0 {
            let info = ErrorInfo::new("empty-layout", "a layout requires at least one sensor");
            return Err(StgcError::Layout(info));
        }
        if track_len == 0 {
            let info = ErrorInfo::new("zero-track-length", "track length must be positive");
            return Err(StgcError::Layout(info));
        }
        if sensor_count > Codeword::BITS as usize {
            let info = ErrorInfo::new(
                "codeword-overflow",
                "layout has more sensors than codeword bits",
            )
            .with_context("sensor_count", sensor_count.to_string());
            return Err(StgcError::Layout(info));
        }
        let tail_len = sensor_count - 1;
        let done = tail_len > track_len - 1;
        let tail: Vec<usize> = (1..=tail_len).collect();
        Ok(Self {
            track_len,
            tail,
            done,
        })
    }

    /// Advances the tail to the next combination, or marks the sweep
    /// finished.
    fn advance(&mut self) {
        let tail_len = self.tail.len();
        for slot in (0..tail_len).rev() {
            let cap = self.track_len - 1 - (tail_len - 1 - slot);
            if self.tail[slot] < cap {
                self.tail[slot] += 1;
                for follow in slot + 1..tail_len {
                    self.tail[follow] = self.tail[follow - 1] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for SensorLayouts {
    type Item = SensorLayout;

    fn next(&mut self) -> Option<SensorLayout> {
        if self.done {
            return None;
        }
        let mut positions = Vec::with_capacity(self.tail.len() + 1);
        positions.push(0);
        positions.extend_from_slice(&self.tail);
        // Combination positions are distinct and within [1, track_len).
        let layout = SensorLayout::new(positions, self.track_len)
            .expect("combination positions are distinct and in range");
        self.advance();
        Some(layout)
    }
}
