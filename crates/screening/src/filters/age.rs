//! Minimum-age eligibility check.

use crate::traits::Filter;
use anyhow::Result;
use candidates::Candidate;

/// Candidates must be strictly older than this (18+).
pub const AGE_CUTOFF: u32 = 17;

/// True iff the candidate is over [`AGE_CUTOFF`] years old.
pub fn meets_age_requirement(candidate: &Candidate) -> bool {
    candidate.age > AGE_CUTOFF
}

/// Removes candidates who are minors.
pub struct AgeFilter;

impl Filter for AgeFilter {
    fn name(&self) -> &str {
        "AgeFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(meets_age_requirement)
            .collect();
        Ok(filtered)
    }
}
