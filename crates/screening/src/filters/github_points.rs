//! Filter on the candidate's external reputation score.

use crate::traits::Filter;
use anyhow::Result;
use candidates::Candidate;

/// Minimum Github points required to qualify.
pub const MIN_GITHUB_POINTS: u32 = 100;

/// True iff the candidate has [`MIN_GITHUB_POINTS`] or more Github points.
pub fn has_enough_github_points(candidate: &Candidate) -> bool {
    candidate.github_points >= MIN_GITHUB_POINTS
}

/// Removes candidates below a reputation threshold.
///
/// The threshold is configurable so experimental screens can tighten or
/// relax it; the qualification gate uses [`MIN_GITHUB_POINTS`].
pub struct GithubPointsFilter {
    min_points: u32,
}

impl GithubPointsFilter {
    /// Create a new GithubPointsFilter.
    ///
    /// # Arguments
    /// * `min_points` - Minimum Github points to keep a candidate (typically 100)
    pub fn new(min_points: u32) -> Self {
        Self { min_points }
    }
}

impl Filter for GithubPointsFilter {
    fn name(&self) -> &str {
        "GithubPointsFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.github_points >= self.min_points)
            .collect();
        Ok(filtered)
    }
}
