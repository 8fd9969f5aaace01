use std::collections::BTreeSet;

use stgc_enum::{binomial, BalancedTracks};

#[test]
fn counts_match_the_binomial_coefficient() {
    for track_len in [2usize, 4, 6, 8, 10] {
        let count = BalancedTracks::new(track_len).count() as u128;
        let expected = binomial(track_len as u64, track_len as u64 / 2);
        assert_eq!(count, expected, "track_len={track_len}");
    }
}

#[test]
fn every_emitted_track_is_distinct_and_balanced() {
    let mut seen = BTreeSet::new();
    for track in BalancedTracks::new(8) {
        assert_eq!(track.len(), 8);
        assert!(track.is_balanced());
        assert!(
            seen.insert(track.to_binary_string()),
            "duplicate track {track}"
        );
    }
    assert_eq!(seen.len(), 70);
}

#[test]
fn enumeration_order_is_reproducible() {
    let first: Vec<String> = BalancedTracks::new(6)
        .map(|track| track.to_binary_string())
        .collect();
    let second: Vec<String> = BalancedTracks::new(6)
        .map(|track| track.to_binary_string())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn ones_are_placed_before_zeros() {
    // Position bits start 1^3 0^3, which renders as 000111 in the
    // MSB-first string form.
    let first = BalancedTracks::new(6).next().unwrap();
    assert_eq!(first.to_binary_string(), "000111");
}

#[test]
fn odd_and_zero_lengths_yield_nothing() {
    assert_eq!(BalancedTracks::new(0).count(), 0);
    assert_eq!(BalancedTracks::new(1).count(), 0);
    assert_eq!(BalancedTracks::new(7).count(), 0);
}

#[test]
fn two_position_enumeration_in_order() {
    let tracks: Vec<String> = BalancedTracks::new(2)
        .map(|track| track.to_binary_string())
        .collect();
    assert_eq!(tracks, vec!["01".to_string(), "10".to_string()]);
}

#[test]
fn binomial_edges() {
    assert_eq!(binomial(0, 0), 1);
    assert_eq!(binomial(6, 3), 20);
    assert_eq!(binomial(30, 15), 155_117_520);
    assert_eq!(binomial(4, 5), 0);
}
