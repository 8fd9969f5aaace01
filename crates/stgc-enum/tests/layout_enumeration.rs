use std::collections::BTreeSet;

use stgc_core::StgcError;
use stgc_enum::{binomial, SensorLayouts};

#[test]
fn single_sensor_layout_is_position_zero() {
    let layouts: Vec<_> = SensorLayouts::new(1, 6).unwrap().collect();
    assert_eq!(layouts.len(), 1);
    assert_eq!(layouts[0].positions(), &[0]);
}

#[test]
fn counts_match_tail_combinations() {
    for (sensor_count, track_len) in [(2usize, 6usize), (3, 6), (3, 8), (4, 7)] {
        let count = SensorLayouts::new(sensor_count, track_len).unwrap().count() as u128;
        let expected = binomial(track_len as u64 - 1, sensor_count as u64 - 1);
        assert_eq!(count, expected, "k={sensor_count} n={track_len}");
    }
}

#[test]
fn every_layout_leads_with_zero_and_ascends() {
    let mut seen = BTreeSet::new();
    for layout in SensorLayouts::new(3, 7).unwrap() {
        let positions = layout.positions().to_vec();
        assert_eq!(positions[0], 0);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(seen.insert(positions));
    }
    assert_eq!(seen.len() as u128, binomial(6, 2));
}

#[test]
fn combination_order_is_lexicographic() {
    let tails: Vec<Vec<usize>> = SensorLayouts::new(3, 5)
        .unwrap()
        .map(|layout| layout.positions()[1..].to_vec())
        .collect();
    assert_eq!(
        tails,
        vec![
            vec![1, 2],
            vec![1, 3],
            vec![1, 4],
            vec![2, 3],
            vec![2, 4],
            vec![3, 4],
        ]
    );
}

#[test]
fn oversized_sensor_count_yields_nothing() {
    assert_eq!(SensorLayouts::new(5, 3).unwrap().count(), 0);
}

#[test]
fn invalid_arguments_fail_fast() {
    assert!(matches!(
        SensorLayouts::new(0, 6).unwrap_err(),
        StgcError::Layout(_)
    ));
    assert!(matches!(
        SensorLayouts::new(1, 0).unwrap_err(),
        StgcError::Layout(_)
    ));
    assert!(matches!(
        SensorLayouts::new(65, 100).unwrap_err(),
        StgcError::Layout(_)
    ));
}
