//! Error types for taskrank-core.
//!
//! The scoring math itself never fails: malformed dates, out-of-range
//! ratings, unknown strategy names, dangling dependency ids and cycles are
//! all absorbed into defaults or explanation text where they are detected.
//! The one thing the engine refuses to do is score a batch whose ids
//! collide, since every score lookup downstream would be ambiguous.

use thiserror::Error;

/// Batch analysis errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// Two tasks resolved to the same id after positional assignment.
    #[error("duplicate task id '{id}' in batch")]
    DuplicateTaskId { id: String },
}
