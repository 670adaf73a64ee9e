//! Core domain types for candidate records.
//!
//! A [`Candidate`] is a job applicant record handed to us by an external
//! data-loading collaborator. This crate only defines the shape of the
//! record; it never creates candidates on its own and nothing in the
//! workspace mutates a collection once supplied.

use crate::error::CandidateError;
use serde::{Deserialize, Serialize};

/// Unique identifier for a candidate, unique within a supplied collection.
pub type CandidateId = u32;

/// A job applicant record.
///
/// Fields mirror what the upstream applicant-tracking export provides.
/// All screening operations treat candidates as immutable inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    /// Whole years of professional experience.
    pub years_of_experience: u32,
    /// External reputation score associated with the candidate.
    pub github_points: u32,
    /// Programming language names the candidate knows, as reported.
    /// Matching against these is case-sensitive.
    pub languages: Vec<String>,
    pub age: u32,
    /// Unix timestamp (seconds) when the application was submitted.
    ///
    /// Carried for recency-based screening; the standard qualification
    /// gate does not consult it.
    pub applied_at: i64,
}

impl Candidate {
    /// Sanity-check a record ingested from an external source.
    ///
    /// The screening functions assume well-formed input; callers loading
    /// raw records run this first and reject anything that fails.
    pub fn validate(&self) -> Result<(), CandidateError> {
        if self.age == 0 {
            return Err(CandidateError::InvalidValue {
                field: "age".to_string(),
                value: self.age.to_string(),
            });
        }
        if self.applied_at < 0 {
            return Err(CandidateError::InvalidValue {
                field: "applied_at".to_string(),
                value: self.applied_at.to_string(),
            });
        }
        Ok(())
    }
}
