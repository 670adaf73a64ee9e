//! Error types for candidate ingestion.

use thiserror::Error;

/// Errors raised when a raw candidate record fails validation.
///
/// The screening functions themselves never produce these; they assume
/// well-formed records and leave malformed input to the caller.
#[derive(Error, Debug)]
pub enum CandidateError {
    /// A field had a value outside its allowed range.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}
