//! Filter implementations for the candidate screening pipeline.
//!
//! Each eligibility rule lives in its own module as a predicate over a
//! single candidate plus a [`Filter`](crate::Filter) wrapper for use in
//! a pipeline.

pub mod age;
pub mod application_window;
pub mod experience;
pub mod github_points;
pub mod languages;

// Re-export for convenience
pub use age::AgeFilter;
pub use application_window::ApplicationWindowFilter;
pub use experience::ExperienceFilter;
pub use github_points::GithubPointsFilter;
pub use languages::LanguageFilter;
