//! # Candidates Crate
//!
//! Domain types for job-applicant records.
//!
//! The candidate dataset is produced by an external data-loading
//! collaborator (an applicant-tracking export, a test fixture, ...) and
//! handed to the screening crate as an ordered `Vec<Candidate>`. This
//! crate defines that record type plus basic ingestion validation, and
//! nothing else: no I/O, no storage, no global roster.

// Public modules
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CandidateError;
pub use types::{Candidate, CandidateId};
