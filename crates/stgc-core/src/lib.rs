#![deny(missing_docs)]
#![doc = "Core types for single-track Gray codes: cyclic bit tracks, ordered sensor layouts, codeword extraction, and the Gray/uniqueness validator."]

/// Candidate pairing of a track and a sensor layout.
pub mod code;
/// Structured error types shared across the stgc crates.
pub mod errors;
/// Canonical hashing helpers for candidates and serializable payloads.
pub mod hash;
/// Sensor layout construction and accessors.
pub mod layout;
/// Persisted record serialization for JSON and binary round-trips.
pub mod record;
/// Cyclic bit track representation.
pub mod track;
/// Gray-adjacency and uniqueness validation.
pub mod validate;

pub use code::{Codeword, GrayCode};
pub use errors::{ErrorInfo, StgcError};
pub use hash::{canonical_code_hash, stable_hash_string};
pub use layout::SensorLayout;
pub use record::{code_from_bytes, code_from_json, code_to_bytes, code_to_json};
pub use track::Track;
pub use validate::{gray_adjacent, is_valid};
