//! Qualification selection and ordering.
//!
//! The two collection-level operations of the screening library: pick the
//! candidates eligible for hire, and order a set of candidates by how
//! qualified they are.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::github_points::MIN_GITHUB_POINTS;
use crate::filters::languages::REQUIRED_LANGUAGES;
use crate::filters::{AgeFilter, ExperienceFilter, GithubPointsFilter, LanguageFilter};
use anyhow::Result;
use candidates::Candidate;

/// The standard four-stage hiring gate as a reusable pipeline.
///
/// [`qualified_candidates`] runs exactly this; callers wanting extra
/// stages (for example
/// [`ApplicationWindowFilter`](crate::filters::ApplicationWindowFilter))
/// start from here and `add_filter` onto it.
pub fn qualification_pipeline() -> FilterPipeline {
    let required = REQUIRED_LANGUAGES.iter().map(|s| s.to_string()).collect();

    FilterPipeline::new()
        .add_filter(ExperienceFilter)
        .add_filter(GithubPointsFilter::new(MIN_GITHUB_POINTS))
        .add_filter(LanguageFilter::new(required))
        .add_filter(AgeFilter)
}

/// Select the candidates eligible for hire.
///
/// A candidate qualifies iff ALL of the following hold:
/// - has some professional experience (strictly more than zero years)
/// - has at least 100 Github points
/// - knows Ruby or Python
/// - is over 17
///
/// Relative order is preserved and each qualifying candidate appears
/// exactly once. Application recency is deliberately not part of this
/// gate; screens that want it add
/// [`ApplicationWindowFilter`](crate::filters::ApplicationWindowFilter)
/// to their own pipeline.
pub fn qualified_candidates(candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
    qualification_pipeline().apply(candidates)
}

/// Order candidates from most to least qualified.
///
/// Sorts by `years_of_experience` descending, ties broken by
/// `github_points` descending. The sort is stable, so candidates equal on
/// both keys keep their original relative order. Returns a new vector;
/// the input is untouched.
pub fn ordered_by_qualifications(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut ordered = candidates.to_vec();
    ordered.sort_by(|a, b| {
        b.years_of_experience
            .cmp(&a.years_of_experience)
            .then(b.github_points.cmp(&a.github_points))
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u32, years: u32, points: u32, languages: &[&str], age: u32) -> Candidate {
        Candidate {
            id,
            years_of_experience: years,
            github_points: points,
            languages: languages.iter().map(|s| s.to_string()).collect(),
            age,
            applied_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_qualified_candidates_applies_all_four_checks() {
        let candidates = vec![
            candidate(1, 3, 150, &["Ruby"], 25),   // qualifies
            candidate(2, 0, 150, &["Ruby"], 25),   // no experience
            candidate(3, 3, 99, &["Ruby"], 25),    // too few points
            candidate(4, 3, 150, &["Go"], 25),     // wrong languages
            candidate(5, 3, 150, &["Python"], 17), // too young
        ];

        let qualified = qualified_candidates(candidates).unwrap();

        assert_eq!(qualified.len(), 1);
        assert_eq!(qualified[0].id, 1);
    }

    #[test]
    fn test_qualified_candidates_single_year_passes() {
        // The gate asks for any experience, not the two-year bar.
        let candidates = vec![candidate(1, 1, 100, &["Python"], 18)];

        let qualified = qualified_candidates(candidates).unwrap();
        assert_eq!(qualified.len(), 1);
    }

    #[test]
    fn test_qualified_candidates_preserves_order() {
        let candidates = vec![
            candidate(5, 2, 120, &["Ruby"], 30),
            candidate(2, 1, 200, &["Python"], 22),
            candidate(9, 4, 100, &["Ruby"], 40),
        ];

        let qualified = qualified_candidates(candidates).unwrap();
        let ids: Vec<u32> = qualified.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_qualification_pipeline_matches_gate() {
        let roster = vec![
            candidate(1, 3, 150, &["Ruby"], 25),
            candidate(2, 0, 150, &["Ruby"], 25),
            candidate(3, 3, 150, &["Go"], 25),
        ];

        let via_pipeline = qualification_pipeline().apply(roster.clone()).unwrap();
        let via_gate = qualified_candidates(roster).unwrap();
        assert_eq!(via_pipeline, via_gate);
    }

    #[test]
    fn test_ordered_by_qualifications() {
        let candidates = vec![
            candidate(1, 1, 200, &["Ruby"], 25),
            candidate(2, 3, 50, &["Ruby"], 25),
            candidate(3, 3, 100, &["Ruby"], 25),
        ];

        let ordered = ordered_by_qualifications(&candidates);
        let ids: Vec<u32> = ordered.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_ordered_by_qualifications_is_stable() {
        // Equal on both keys: original relative order must survive.
        let candidates = vec![
            candidate(1, 2, 100, &["Ruby"], 25),
            candidate(2, 2, 100, &["Ruby"], 25),
            candidate(3, 5, 100, &["Ruby"], 25),
        ];

        let ordered = ordered_by_qualifications(&candidates);
        let ids: Vec<u32> = ordered.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_ordered_by_qualifications_leaves_input_alone() {
        let candidates = vec![
            candidate(1, 1, 200, &["Ruby"], 25),
            candidate(2, 3, 50, &["Ruby"], 25),
        ];
        let before = candidates.clone();

        let _ordered = ordered_by_qualifications(&candidates);
        assert_eq!(candidates, before);
    }
}
