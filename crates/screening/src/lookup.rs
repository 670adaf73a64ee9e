//! Candidate lookup by id.

use candidates::{Candidate, CandidateId};

/// Find the first candidate with the given id.
///
/// Returns `None` when no candidate matches. Ids are unique within a
/// supplied collection, so "first" is also "only" for well-formed input.
pub fn find(id: CandidateId, candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().find(|candidate| candidate.id == id)
}
