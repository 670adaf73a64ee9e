//! Optional filter for application recency.
//!
//! Keeps only candidates who applied within a trailing window. This stage
//! is NOT part of the standard qualification gate
//! ([`qualified_candidates`](crate::selection::qualified_candidates));
//! screens that care about recency add it to their pipeline explicitly.

use crate::traits::Filter;
use anyhow::Result;
use candidates::Candidate;

/// Default trailing window for a "recent" application, in days.
pub const APPLICATION_WINDOW_DAYS: i64 = 15;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// True iff the candidate applied within the trailing window ending at `now`.
///
/// `now` and `applied_at` are Unix timestamps in seconds. Applications
/// with a timestamp after `now` are treated as outside the window.
pub fn applied_within(candidate: &Candidate, now: i64, window_days: i64) -> bool {
    let earliest = now - window_days * SECONDS_PER_DAY;
    candidate.applied_at >= earliest && candidate.applied_at <= now
}

/// Removes candidates whose application is older than the window.
///
/// ## Algorithm
/// 1. Compute the window start as `now` minus `window_days` days
/// 2. Keep candidates with `applied_at` inside `[start, now]`
///
/// The reference clock is injected rather than read from the system, so
/// screening stays a pure function of its inputs.
pub struct ApplicationWindowFilter {
    now: i64,
    window_days: i64,
}

impl ApplicationWindowFilter {
    /// Create a new ApplicationWindowFilter.
    ///
    /// # Arguments
    /// * `now` - Reference Unix timestamp the window ends at
    /// * `window_days` - Window length in days (typically 15)
    pub fn new(now: i64, window_days: i64) -> Self {
        Self { now, window_days }
    }
}

impl Filter for ApplicationWindowFilter {
    fn name(&self) -> &str {
        "ApplicationWindowFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| applied_within(candidate, self.now, self.window_days))
            .collect();
        Ok(filtered)
    }
}
