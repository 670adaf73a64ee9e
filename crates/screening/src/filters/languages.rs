//! Filter on the programming languages a candidate knows.

use crate::traits::Filter;
use anyhow::Result;
use candidates::Candidate;

/// Languages the role requires; knowing any one of them is enough.
pub const REQUIRED_LANGUAGES: [&str; 2] = ["Ruby", "Python"];

/// True iff the candidate knows at least one of [`REQUIRED_LANGUAGES`].
///
/// Matching is a case-sensitive exact comparison against the reported
/// language names ("ruby" does not match "Ruby").
pub fn knows_required_languages(candidate: &Candidate) -> bool {
    candidate
        .languages
        .iter()
        .any(|language| REQUIRED_LANGUAGES.contains(&language.as_str()))
}

/// Removes candidates who know none of the required languages.
///
/// ## Algorithm
/// Keep a candidate iff the intersection of their reported languages and
/// the required list is non-empty. Any-of semantics, case-sensitive.
pub struct LanguageFilter {
    required: Vec<String>,
}

impl LanguageFilter {
    /// Create a new LanguageFilter.
    ///
    /// # Arguments
    /// * `required` - Language names, any one of which qualifies a candidate
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .languages
                    .iter()
                    .any(|language| self.required.contains(language))
            })
            .collect();
        Ok(filtered)
    }
}
