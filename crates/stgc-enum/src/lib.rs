#![deny(missing_docs)]
#![doc = "Lazy candidate enumerators for single-track Gray code search: duplicate-free balanced tracks and rotation-canonical sensor layouts."]

/// Duplicate-free balanced track enumeration.
pub mod balanced;
/// Canonical sensor layout enumeration.
pub mod layouts;

pub use balanced::{binomial, BalancedTracks};
pub use layouts::SensorLayouts;
