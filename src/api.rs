//! Public API surface for the rotation schedule engine.
//!
//! This file consolidates the value types consumed and produced by the
//! scheduling services. All input/output types derive Serialize/Deserialize
//! for JSON interchange, with timestamp fields pinned to the second-precision
//! UTC text form.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::time::{self, Timestamp};

/// On-call participant identifier.
///
/// Opaque and equality-comparable; the engine attaches no further structure
/// to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    pub fn new(value: impl Into<String>) -> Self {
        Owner(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Owner {
    fn from(value: &str) -> Self {
        Owner(value.to_string())
    }
}

impl From<String> for Owner {
    fn from(value: String) -> Self {
        Owner(value)
    }
}

/// Half-open time interval `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// Start instant, included in the interval
    pub start: Timestamp,
    /// End instant, excluded from the interval
    pub end: Timestamp,
}

impl Period {
    /// Create a period, rejecting empty or inverted intervals.
    pub fn new(start: Timestamp, end: Timestamp) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Length of the interval.
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Check if a given instant lies inside this interval (inclusive start, exclusive end).
    pub fn contains(&self, t: Timestamp) -> bool {
        self.start <= t && t < self.end
    }

    /// Check if this interval overlaps with another.
    ///
    /// Half-open semantics: intervals that merely touch do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Intersection with `window`, or `None` when the result would be empty.
    pub fn clip(&self, window: &Self) -> Option<Self> {
        Self::new(self.start.max(window.start), self.end.min(window.end))
    }
}

/// Rotation definition: ordered participants, handover epoch, and interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDefinition {
    /// Participants in handover order
    pub users: Vec<Owner>,
    /// Instant of the first handover; the rotation's own epoch, fixed
    /// independently of any query window
    #[serde(with = "time::utc_second")]
    pub handover_start_at: Timestamp,
    /// Whole days between handovers
    pub handover_interval_days: i64,
}

impl ScheduleDefinition {
    pub fn new(
        users: Vec<Owner>,
        handover_start_at: Timestamp,
        handover_interval_days: i64,
    ) -> Self {
        Self {
            users,
            handover_start_at,
            handover_interval_days,
        }
    }

    /// Interval between handovers as a duration.
    pub fn handover_interval(&self) -> chrono::Duration {
        chrono::Duration::days(self.handover_interval_days)
    }

    /// Eager validation of the definition invariants.
    ///
    /// `users` must be non-empty and the handover interval strictly positive.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.users.is_empty() {
            return Err(ScheduleError::InvalidDefinition(
                "users must not be empty".to_string(),
            ));
        }
        if self.handover_interval_days <= 0 {
            return Err(ScheduleError::InvalidDefinition(format!(
                "handover_interval_days must be positive, got {}",
                self.handover_interval_days
            )));
        }
        Ok(())
    }
}

/// Temporary reassignment of coverage to another participant.
///
/// Overrides are supplied as an ordered list; wherever their active
/// intervals overlap, later entries in the list take precedence over
/// earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Override {
    pub user: Owner,
    /// Start of the overridden interval, inclusive
    #[serde(with = "time::utc_second")]
    pub start_at: Timestamp,
    /// End of the overridden interval, exclusive
    #[serde(with = "time::utc_second")]
    pub end_at: Timestamp,
}

impl Override {
    pub fn new(user: impl Into<Owner>, start_at: Timestamp, end_at: Timestamp) -> Self {
        Self {
            user: user.into(),
            start_at,
            end_at,
        }
    }

    /// Active interval of this override.
    pub fn period(&self) -> Period {
        Period {
            start: self.start_at,
            end: self.end_at,
        }
    }

    /// Check the `start_at < end_at` invariant.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.start_at >= self.end_at {
            return Err(ScheduleError::InvalidOverride {
                user: self.user.clone(),
                start_at: self.start_at,
                end_at: self.end_at,
            });
        }
        Ok(())
    }
}

/// One contiguous run of exclusive on-call ownership.
///
/// The element type of every pipeline stage's output: a timeline is an
/// ordered sequence of shifts, sorted by start, non-overlapping, and never
/// zero-length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub user: Owner,
    /// Start of coverage, inclusive
    #[serde(with = "time::utc_second")]
    pub start_at: Timestamp,
    /// End of coverage, exclusive
    #[serde(with = "time::utc_second")]
    pub end_at: Timestamp,
}

impl Shift {
    pub fn new(user: impl Into<Owner>, start_at: Timestamp, end_at: Timestamp) -> Self {
        Self {
            user: user.into(),
            start_at,
            end_at,
        }
    }

    /// Covered interval of this shift.
    pub fn period(&self) -> Period {
        Period {
            start: self.start_at,
            end: self.end_at,
        }
    }

    /// Length of the shift.
    pub fn duration(&self) -> chrono::Duration {
        self.end_at - self.start_at
    }
}
