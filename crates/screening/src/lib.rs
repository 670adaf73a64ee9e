//! Screening library for job-applicant candidates.
//!
//! This crate provides:
//! - Eligibility predicates over single candidates
//! - Filter trait and implementations for candidate screening
//! - FilterPipeline for composing filters
//! - Selection helpers: qualification gating and qualification ordering
//! - Lookup of a candidate by id
//!
//! ## Architecture
//! Screening runs in stages:
//! 1. Filters remove ineligible candidates (no experience, low reputation,
//!    missing languages, underage)
//! 2. Survivors are ordered by experience, then reputation
//!
//! Everything is a pure function of its inputs: no I/O, no global roster,
//! no mutation of supplied collections. The candidate data itself comes
//! from an external loader (see the `candidates` crate).
//!
//! ## Example Usage
//! ```ignore
//! use screening::{qualified_candidates, ordered_by_qualifications, find};
//!
//! // Gate the roster, then rank the survivors
//! let qualified = qualified_candidates(roster)?;
//! let ranked = ordered_by_qualifications(&qualified);
//!
//! // Look a specific candidate up
//! if let Some(candidate) = find(42, &ranked) {
//!     println!("{} years of experience", candidate.years_of_experience);
//! }
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod lookup;
pub mod selection;
pub mod traits;

// Re-export main types and operations
pub use filter_pipeline::FilterPipeline;
pub use lookup::find;
pub use selection::{ordered_by_qualifications, qualification_pipeline, qualified_candidates};
pub use traits::Filter;

// Single-candidate predicates, re-exported flat for callers that just
// want the checks without pipeline machinery.
pub use filters::age::meets_age_requirement;
pub use filters::application_window::applied_within;
pub use filters::experience::{has_required_experience, is_experienced};
pub use filters::github_points::has_enough_github_points;
pub use filters::languages::knows_required_languages;
