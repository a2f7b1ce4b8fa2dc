use proptest::prelude::*;
use survivor_core::{
    brute_force_position, max_rounds, survivor_position, RoundDescriptor, RoundSequence,
};

#[test]
fn matches_oracle_up_to_ten_thousand() {
    for chairs in 1..=10_000u64 {
        assert_eq!(
            survivor_position(chairs).unwrap(),
            brute_force_position(chairs).unwrap(),
            "chairs = {}",
            chairs
        );
    }
}

#[test]
fn worked_examples_agree_with_oracle() {
    for (chairs, expected) in [(100u64, 72u64), (1_000_000, 951_424)] {
        assert_eq!(survivor_position(chairs).unwrap(), expected);
        assert_eq!(brute_force_position(chairs).unwrap(), expected);
    }
}

#[test]
fn rounds_stay_within_bound_up_to_ten_thousand() {
    for chairs in 1..=10_000u64 {
        let seq = RoundSequence::forward(chairs).unwrap();
        let rounds = seq.descriptors();

        assert_eq!(rounds.last().unwrap().count, 1, "chairs = {}", chairs);
        assert!(
            seq.len() <= max_rounds(chairs) as usize,
            "chairs = {}: {} rounds, bound {}",
            chairs,
            seq.len(),
            max_rounds(chairs)
        );
        for pair in rounds.windows(2) {
            assert!(pair[1].count < pair[0].count, "chairs = {}", chairs);
        }
    }
}

proptest! {
    #[test]
    fn survivor_is_in_the_circle(chairs in 1..=u64::MAX) {
        let survivor = survivor_position(chairs).unwrap();
        prop_assert!(survivor >= 1);
        prop_assert!(survivor <= chairs);
    }

    #[test]
    fn survivor_is_deterministic(chairs in 1..=u64::MAX) {
        let first = survivor_position(chairs).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(survivor_position(chairs).unwrap(), first);
        }
    }

    #[test]
    fn rounds_shrink_to_a_single_survivor(chairs in 1..=u64::MAX) {
        let seq = RoundSequence::forward(chairs).unwrap();
        let rounds = seq.descriptors();

        prop_assert_eq!(rounds[0], RoundDescriptor::initial(chairs));
        prop_assert_eq!(rounds.last().unwrap().count, 1);
        prop_assert!(seq.len() <= max_rounds(chairs) as usize);

        for pair in rounds.windows(2) {
            prop_assert!(pair[1].count < pair[0].count);
            prop_assert_eq!(pair[0].next(), Some(pair[1]));
        }
    }

    #[test]
    fn matches_oracle_on_random_circles(chairs in 1..200_000u64) {
        prop_assert_eq!(
            survivor_position(chairs).unwrap(),
            brute_force_position(chairs).unwrap()
        );
    }
}
