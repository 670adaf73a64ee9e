//! Composition of screening rules into an ordered pipeline.

use crate::traits::Filter;
use anyhow::Result;
use candidates::Candidate;

/// An ordered chain of [`Filter`] stages.
///
/// Built up with [`add_filter`](Self::add_filter) and run with
/// [`apply`](Self::apply); a candidate survives only if every stage keeps
/// it. Stage order matters for log readability, not for the result, since
/// each stage is a pure predicate over single candidates.
///
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExperienceFilter)
///     .add_filter(GithubPointsFilter::new(100))
///     .add_filter(AgeFilter);
///
/// let survivors = pipeline.apply(roster)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// An empty pipeline; applying it returns the input unchanged.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a stage, returning `self` for chaining.
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Run every stage in order over the candidates.
    ///
    /// The roster shrinks monotonically: each stage receives what the
    /// previous one kept, and per-stage counts are logged at debug level
    /// so a screen can be audited after the fact. Relative order of the
    /// survivors always matches the input.
    pub fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current)?;
            tracing::debug!(
                stage = filter.name(),
                kept = current.len(),
                dropped = before - current.len(),
                "screening stage finished"
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::AgeFilter;

    fn candidate(id: u32, age: u32) -> Candidate {
        Candidate {
            id,
            years_of_experience: 3,
            github_points: 150,
            languages: vec!["Ruby".to_string()],
            age,
            applied_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_pipeline_without_stages_keeps_roster_intact() {
        let pipeline = FilterPipeline::new();

        let candidates = vec![candidate(1, 25), candidate(2, 30)];

        let survivors = pipeline.apply(candidates.clone()).unwrap();
        assert_eq!(survivors, candidates);
    }

    #[test]
    fn test_stage_drops_failing_candidates_only() {
        let pipeline = FilterPipeline::new().add_filter(AgeFilter);

        let candidates = vec![candidate(1, 16), candidate(2, 30)];

        let survivors = pipeline.apply(candidates).unwrap();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].id, 2);
    }
}
