use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ErrorInfo, StgcError};

/// Cyclic bit track of an absolute rotary encoder.
///
/// Bits are stored one byte per angular position, index `i` holding the
/// state of the track at position `i`. A `Track` carries no validity of
/// its own; it is a hypothesis to be paired with a [`SensorLayout`] and
/// checked by the validator.
///
/// [`SensorLayout`]: crate::layout::SensorLayout
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    bits: Box<[u8]>,
}

impl Track {
    /// Creates a track from raw position bits (index = angular position).
    pub fn from_bits(bits: impl Into<Vec<u8>>) -> Result<Self, StgcError> {
        let bits: Vec<u8> = bits.into();
        if bits.is_empty() {
            let info = ErrorInfo::new("empty-track", "a track must contain at least one bit");
            return Err(StgcError::Track(info));
        }
        if let Some(position) = bits.iter().position(|&bit| bit > 1) {
            let info = ErrorInfo::new("invalid-track-bit", "track bits must be 0 or 1")
                .with_context("position", position.to_string());
            return Err(StgcError::Track(info));
        }
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Parses a most-significant-bit-first binary string.
    ///
    /// Character `j` of the string is the bit of angular position
    /// `len - 1 - j`, matching the persisted record format.
    pub fn from_binary_str(text: &str) -> Result<Self, StgcError> {
        if text.is_empty() {
            let info = ErrorInfo::new("empty-track-string", "track string must not be empty");
            return Err(StgcError::Record(info));
        }
        let len = text.chars().count();
        let mut bits = vec![0u8; len];
        for (idx, ch) in text.chars().enumerate() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                other => {
                    let info = ErrorInfo::new(
                        "non-binary-track",
                        "track string may only contain the characters 0 and 1",
                    )
                    .with_context("character", other.to_string())
                    .with_context("index", idx.to_string());
                    return Err(StgcError::Record(info));
                }
            };
            bits[len - 1 - idx] = bit;
        }
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Number of angular positions on the track.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false; tracks reject empty construction.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// State of the track at the given position, reduced modulo the length.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index % self.bits.len()] == 1
    }

    /// Number of set bits on the track.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit == 1).count()
    }

    /// Whether exactly half of the bits are set.
    ///
    /// Balance is necessary (not sufficient) for any single-track Gray
    /// code to exist on this track.
    pub fn is_balanced(&self) -> bool {
        self.len() % 2 == 0 && self.ones() * 2 == self.len()
    }

    /// Renders the most-significant-bit-first binary string.
    ///
    /// Exact inverse of [`Track::from_binary_str`]; the string length
    /// always equals the track length, leading zeros included.
    pub fn to_binary_string(&self) -> String {
        self.bits
            .iter()
            .rev()
            .map(|&bit| if bit == 1 { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary_string())
    }
}

impl Serialize for Track {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_binary_string())
    }
}

impl<'de> Deserialize<'de> for Track {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Track::from_binary_str(&text).map_err(DeError::custom)
    }
}
