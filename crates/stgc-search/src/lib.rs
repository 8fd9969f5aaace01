#![deny(missing_docs)]
#![doc = "Search strategies over the single-track Gray code candidate space: per-layout track search, layout sweeps, minimum-sensor and maximum-resolution searches, and reproducible sweep plans."]

/// The layered search strategies.
pub mod strategies;
/// Declarative, hash-stamped parameter sweeps.
pub mod sweep;

pub use strategies::{
    find_gray_code, find_max_gray_code_by_sensors, find_minimum_gray_code_by_track,
    find_sensor_gray_codes, min_sensor_floor,
};
pub use sweep::{plan_from_json, plan_from_yaml, sweep, SweepJobReport, SweepPlan, SweepReport};
