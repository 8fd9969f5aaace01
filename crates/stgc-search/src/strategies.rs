use stgc_core::errors::ErrorInfo;
use stgc_core::{validate, GrayCode, SensorLayout, StgcError};
use stgc_enum::{BalancedTracks, SensorLayouts};

/// Finds the first valid track for a fixed sensor layout.
///
/// Sweeps the balanced tracks of the layout's length in enumeration
/// order and returns the first candidate the validator accepts. An odd
/// track length returns `None` immediately, before any enumeration: a
/// balanced track cannot exist there. Exhaustion is an absence, not an
/// error.
pub fn find_gray_code(layout: &SensorLayout) -> Result<Option<GrayCode>, StgcError> {
    let track_len = layout.track_len();
    if track_len % 2 != 0 {
        return Ok(None);
    }
    for track in BalancedTracks::new(track_len) {
        let candidate = GrayCode::new(layout.clone(), track)?;
        if validate::is_valid(&candidate) {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Searches every canonical sensor layout for a fixed sensor count and
/// track length.
///
/// With `first_only` the result holds at most the first solution in
/// layout enumeration order; otherwise every solution is collected. An
/// empty vector means the search space is exhausted.
pub fn find_sensor_gray_codes(
    sensor_count: usize,
    track_len: usize,
    first_only: bool,
) -> Result<Vec<GrayCode>, StgcError> {
    let mut solutions = Vec::new();
    for layout in SensorLayouts::new(sensor_count, track_len)? {
        if let Some(code) = find_gray_code(&layout)? {
            solutions.push(code);
            if first_only {
                break;
            }
        }
    }
    Ok(solutions)
}

/// Smallest sensor count whose codeword space can cover the track.
///
/// `track_len` distinct codewords need `2^sensor_count >= track_len`;
/// counts below this floor are pruned without being searched.
pub fn min_sensor_floor(track_len: usize) -> usize {
    let mut sensor_count = 1;
    while sensor_count < usize::BITS as usize && (1usize << sensor_count) < track_len {
        sensor_count += 1;
    }
    sensor_count
}

/// Finds the fewest-sensor configurations for a fixed track length.
///
/// Sensor counts ascend from [`min_sensor_floor`]; the solutions of the
/// first succeeding count are returned (one solution when `first_only`).
pub fn find_minimum_gray_code_by_track(
    track_len: usize,
    first_only: bool,
) -> Result<Vec<GrayCode>, StgcError> {
    if track_len < 2 || track_len % 2 != 0 {
        return Ok(Vec::new());
    }
    for sensor_count in min_sensor_floor(track_len)..track_len {
        let solutions = find_sensor_gray_codes(sensor_count, track_len, first_only)?;
        if !solutions.is_empty() {
            return Ok(solutions);
        }
    }
    Ok(Vec::new())
}

/// Finds the longest-track configurations for a fixed sensor count.
///
/// Track lengths descend from `2^sensor_count`, the codeword-space
/// ceiling, down to one; the solutions of the first succeeding length
/// are returned (one solution when `first_only`).
pub fn find_max_gray_code_by_sensors(
    sensor_count: usize,
    first_only: bool,
) -> Result<Vec<GrayCode>, StgcError> {
    let ceiling = (sensor_count < usize::BITS as usize)
        .then(|| 1usize << sensor_count)
        .ok_or_else(|| {
            StgcError::Layout(
                ErrorInfo::new(
                    "codeword-overflow",
                    "codeword space for this sensor count exceeds the addressable track length",
                )
                .with_context("sensor_count", sensor_count.to_string()),
            )
        })?;
    for track_len in (1..=ceiling).rev() {
        let solutions = find_sensor_gray_codes(sensor_count, track_len, first_only)?;
        if !solutions.is_empty() {
            return Ok(solutions);
        }
    }
    Ok(Vec::new())
}
