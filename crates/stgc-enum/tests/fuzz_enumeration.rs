use std::collections::BTreeSet;

use proptest::prelude::*;
use stgc_enum::{binomial, BalancedTracks, SensorLayouts};

proptest! {
    #[test]
    fn balanced_sweeps_are_complete_and_duplicate_free(half in 1usize..6) {
        let track_len = half * 2;
        let mut seen = BTreeSet::new();
        for track in BalancedTracks::new(track_len) {
            prop_assert_eq!(track.len(), track_len);
            prop_assert!(track.is_balanced());
            prop_assert!(seen.insert(track.to_binary_string()));
        }
        prop_assert_eq!(seen.len() as u128, binomial(track_len as u64, half as u64));
    }

    #[test]
    fn layout_sweeps_stay_canonical(sensor_count in 1usize..5, track_len in 2usize..10) {
        for layout in SensorLayouts::new(sensor_count, track_len).unwrap() {
            prop_assert_eq!(layout.sensor_count(), sensor_count);
            prop_assert_eq!(layout.track_len(), track_len);
            prop_assert_eq!(layout.positions()[0], 0);
            let positions = layout.positions();
            prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
