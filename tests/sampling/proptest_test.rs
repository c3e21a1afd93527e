use ed_synth::algorithm::generation::derive_clinical_course;
use ed_synth::algorithm::generation::pipeline::satisfaction_range;
use ed_synth::algorithm::sampling::{SeverityTiming, WeightedTable, seeded_rng};
use ed_synth::models::{EsiLevel, Outcome};
use proptest::prelude::*;

proptest! {
    /// A draw never lands on a zero-weight outcome and is always in range
    #[test]
    fn weighted_draws_respect_weights(
        weights in prop::collection::vec(0.0f64..10.0, 1..12),
        seed in any::<u64>(),
    ) {
        prop_assume!(weights.iter().sum::<f64>() > 0.0);
        let table = WeightedTable::new(weights.iter().copied().enumerate()).unwrap();
        let mut rng = seeded_rng(Some(seed));

        for _ in 0..50 {
            let index = *table.sample(&mut rng);
            prop_assert!(index < weights.len());
            prop_assert!(weights[index] > 0.0);
        }
    }

    #[test]
    fn probabilities_sum_to_one(weights in prop::collection::vec(0.1f64..5.0, 1..10)) {
        let table = WeightedTable::new(weights.iter().copied().enumerate()).unwrap();
        let total: f64 = (0..table.len()).filter_map(|i| table.probability(i)).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    /// Every derived course satisfies the cross-field invariants
    #[test]
    fn clinical_course_invariants(base in 1u8..=5, seed in any::<u64>()) {
        let wait = SeverityTiming::door_to_doctor().unwrap();
        let stay = SeverityTiming::length_of_stay().unwrap();
        let mut rng = seeded_rng(Some(seed));

        let base = EsiLevel::new(base).unwrap();
        let course = derive_clinical_course(base, &wait, &stay, &mut rng);

        prop_assert!((1..=5).contains(&course.esi_level.value()));
        prop_assert!(course.esi_level.value().abs_diff(base.value()) <= 1);
        prop_assert_eq!(course.lwbs, course.outcome == Outcome::Lwbs);
        prop_assert!(course.door_to_doctor_mins >= 1);
        prop_assert!(course.length_of_stay_mins >= 30);

        let (low, high) = satisfaction_range(course.outcome);
        prop_assert!((low..=high).contains(&course.satisfaction_score));
    }
}
