use serde::{Deserialize, Serialize};

use stgc_core::errors::{ErrorInfo, StgcError};
use stgc_core::{stable_hash_string, GrayCode};

use crate::strategies::find_sensor_gray_codes;

/// Declarative description of a deterministic search sweep.
///
/// The sweep runs [`find_sensor_gray_codes`] over the Cartesian grid of
/// sensor counts and track lengths, in the order listed. Plans are
/// loadable from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPlan {
    /// Sensor counts to try, in order.
    pub sensor_counts: Vec<usize>,
    /// Track lengths to try for each sensor count, in order.
    pub track_lens: Vec<usize>,
    /// Stop each grid cell at its first solution.
    #[serde(default = "SweepPlan::default_first_only")]
    pub first_only: bool,
}

impl SweepPlan {
    const fn default_first_only() -> bool {
        true
    }
}

/// Outcome of one grid cell of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepJobReport {
    /// Sensor count searched by the job.
    pub sensor_count: usize,
    /// Track length searched by the job.
    pub track_len: usize,
    /// Solutions discovered, in enumeration order.
    pub solutions: Vec<GrayCode>,
}

impl SweepJobReport {
    /// Whether the job found at least one solution.
    pub fn solved(&self) -> bool {
        !self.solutions.is_empty()
    }
}

/// Aggregate sweep report persisted for reproducibility.
///
/// Re-running the same plan reproduces the identical report, plan hash
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Stable hash of the plan that produced the report.
    pub plan_hash: String,
    /// Per-cell results in grid order.
    pub jobs: Vec<SweepJobReport>,
    /// Number of cells with at least one solution.
    pub solved: usize,
    /// Total number of cells.
    pub total: usize,
}

/// Executes the deterministic sweep described by the plan.
pub fn sweep(plan: &SweepPlan) -> Result<SweepReport, StgcError> {
    let plan_hash = stable_hash_string(plan)?;
    let mut jobs = Vec::with_capacity(plan.sensor_counts.len() * plan.track_lens.len());
    for &sensor_count in &plan.sensor_counts {
        for &track_len in &plan.track_lens {
            let solutions = find_sensor_gray_codes(sensor_count, track_len, plan.first_only)?;
            jobs.push(SweepJobReport {
                sensor_count,
                track_len,
                solutions,
            });
        }
    }
    let solved = jobs.iter().filter(|job| job.solved()).count();
    let total = jobs.len();
    Ok(SweepReport {
        plan_hash,
        jobs,
        solved,
        total,
    })
}

/// Parses a sweep plan from YAML.
pub fn plan_from_yaml(input: &str) -> Result<SweepPlan, StgcError> {
    serde_yaml::from_str(input)
        .map_err(|err| StgcError::Record(ErrorInfo::new("deserialize-yaml", err.to_string())))
}

/// Parses a sweep plan from JSON.
pub fn plan_from_json(input: &str) -> Result<SweepPlan, StgcError> {
    serde_json::from_str(input)
        .map_err(|err| StgcError::Record(ErrorInfo::new("deserialize-json", err.to_string())))
}
