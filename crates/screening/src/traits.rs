//! The Filter trait, the seam every eligibility rule plugs into.

use anyhow::Result;
use candidates::Candidate;

/// A single screening rule over a candidate set.
///
/// Implementors get chained in a [`FilterPipeline`](crate::FilterPipeline),
/// so they must uphold two contracts:
/// - the output is an order-preserving subset of the input
/// - `Send + Sync`, since a pipeline may be shared across threads
///
/// Rules consume the `Vec<Candidate>` and hand back the survivors, which
/// lets a stage drop records without cloning the ones it keeps.
pub trait Filter: Send + Sync {
    /// Stage name used in log output.
    fn name(&self) -> &str;

    /// Run this rule, returning only the candidates that pass it.
    ///
    /// Fallible so that future rules backed by external data can report
    /// failure; the built-in rules never error.
    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>>;
}
