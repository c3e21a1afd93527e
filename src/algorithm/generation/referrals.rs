//! Referral generation for discharged visits

use rand::Rng;

use crate::algorithm::sampling::WeightedTable;
use crate::catalog::{NO_REFERRAL, REFERRAL_DESTINATIONS};
use crate::config::NoneReferralPolicy;
use crate::error::Result;
use crate::models::{Referral, Visit};

/// Weighted table of referral destinations, "None" included
pub fn referral_destinations() -> Result<WeightedTable<&'static str>> {
    WeightedTable::new(REFERRAL_DESTINATIONS)
}

/// Draw one referral per discharged visit
///
/// Admitted and LWBS visits never produce a referral. With
/// [`NoneReferralPolicy::Skip`] a "None" draw also produces no row.
pub fn generate_referrals<R: Rng + ?Sized>(
    visits: &[Visit],
    destinations: &WeightedTable<&'static str>,
    policy: NoneReferralPolicy,
    rng: &mut R,
) -> Vec<Referral> {
    visits
        .iter()
        .filter(|visit| visit.is_discharged())
        .filter_map(|visit| {
            let department = destinations.draw(rng);
            if department == NO_REFERRAL && policy == NoneReferralPolicy::Skip {
                return None;
            }
            Some(Referral {
                visit_id: visit.visit_id.clone(),
                date: visit.date,
                referral_department: department.to_string(),
            })
        })
        .collect()
}
