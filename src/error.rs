//! Error types for schedule computation.

use thiserror::Error;

use crate::api::Owner;
use crate::models::time::Timestamp;

/// Result type for schedule operations
pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;

/// Errors that can occur while computing a rotation schedule.
///
/// All variants are raised eagerly, before any output is produced; a
/// computation either returns the full requested timeline or fails with no
/// partial result. Every failure is deterministic, never transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The rotation definition failed eager validation.
    #[error("Invalid schedule definition: {0}")]
    InvalidDefinition(String),

    /// An override violates the `start_at < end_at` invariant.
    #[error("Invalid override for user '{user}': start {start_at} is not before end {end_at}")]
    InvalidOverride {
        user: Owner,
        start_at: Timestamp,
        end_at: Timestamp,
    },

    /// A timestamp string did not match the expected text form.
    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },
}
