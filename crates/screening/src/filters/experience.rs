//! Experience checks.
//!
//! Two distinct bars exist here and they are not interchangeable:
//! the qualification gate only asks for *any* experience, while
//! [`is_experienced`] marks the stronger two-year threshold used when
//! talking about seniority.

use crate::traits::Filter;
use anyhow::Result;
use candidates::Candidate;

/// Years of experience at which a candidate counts as experienced.
pub const EXPERIENCED_YEARS: u32 = 2;

/// True iff the candidate has [`EXPERIENCED_YEARS`] or more years of
/// experience.
pub fn is_experienced(candidate: &Candidate) -> bool {
    candidate.years_of_experience >= EXPERIENCED_YEARS
}

/// True iff the candidate has any professional experience at all.
///
/// This is the bar the qualification gate applies. It is deliberately
/// weaker than [`is_experienced`]; do not unify the two.
pub fn has_required_experience(candidate: &Candidate) -> bool {
    candidate.years_of_experience > 0
}

/// Removes candidates with no professional experience.
///
/// ## Algorithm
/// Keeps exactly the candidates for which [`has_required_experience`]
/// holds, in their original order.
pub struct ExperienceFilter;

impl Filter for ExperienceFilter {
    fn name(&self) -> &str {
        "ExperienceFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(has_required_experience)
            .collect();
        Ok(filtered)
    }
}
