use std::collections::BTreeSet;

use crate::code::{Codeword, GrayCode};

/// Whether two codewords differ in exactly one bit.
pub fn gray_adjacent(a: Codeword, b: Codeword) -> bool {
    (a ^ b).count_ones() == 1
}

/// Checks whether the candidate is a single-track Gray code.
///
/// Every consecutive pair of rotational readings (cyclically, including
/// the wraparound from the last offset back to offset zero) must be
/// Gray-adjacent, and no two offsets may share a codeword. Equivalently,
/// the reading sequence is a Hamiltonian cycle on the distance-1 edges
/// of the sensor-count-bit hypercube visiting `track_len` vertices.
pub fn is_valid(code: &GrayCode) -> bool {
    let track_len = code.track_len();
    let mut seen: BTreeSet<Codeword> = BTreeSet::new();
    let mut previous = code.reading(track_len - 1);
    for offset in 0..track_len {
        let current = code.reading(offset);
        if !gray_adjacent(current, previous) {
            return false;
        }
        if !seen.insert(current) {
            return false;
        }
        previous = current;
    }
    true
}
