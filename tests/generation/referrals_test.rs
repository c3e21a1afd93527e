use ed_synth::algorithm::generation::{generate_referrals, referral_destinations};
use ed_synth::algorithm::sampling::seeded_rng;
use ed_synth::catalog::{NO_REFERRAL, REFERRAL_DESTINATIONS};
use ed_synth::{NoneReferralPolicy, Result};

use crate::utils::{date, generate};

#[test]
fn test_record_policy_covers_every_discharge() -> Result<()> {
    let dataset = generate(date(2024, 4, 1), date(2024, 4, 30), 42)?;

    assert_eq!(dataset.referrals.len(), dataset.discharged_count());
    let known: Vec<&str> = REFERRAL_DESTINATIONS.iter().map(|(name, _)| *name).collect();
    assert!(
        dataset
            .referrals
            .iter()
            .all(|r| known.contains(&r.referral_department.as_str()))
    );
    Ok(())
}

#[test]
fn test_skip_policy_drops_none_rows() -> Result<()> {
    let dataset = generate(date(2024, 4, 1), date(2024, 4, 30), 42)?;
    let table = referral_destinations()?;

    let mut rng = seeded_rng(Some(1));
    let skipped = generate_referrals(&dataset.visits, &table, NoneReferralPolicy::Skip, &mut rng);

    assert!(skipped.iter().all(|r| r.referral_department != NO_REFERRAL));
    assert!(skipped.len() < dataset.discharged_count());
    Ok(())
}

#[test]
fn test_referral_dates_follow_visits() -> Result<()> {
    let dataset = generate(date(2024, 4, 1), date(2024, 4, 7), 8)?;

    for referral in &dataset.referrals {
        let visit = dataset
            .visits
            .iter()
            .find(|v| v.visit_id == referral.visit_id)
            .expect("referral links to a visit");
        assert_eq!(visit.date, referral.date);
    }
    Ok(())
}
