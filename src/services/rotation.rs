//! Base rotation generation.
//!
//! Expands a rotation definition into the round-robin sequence of handover
//! shifts intersecting a query window.

use crate::api::{Period, ScheduleDefinition, Shift};
use crate::error::ScheduleResult;
use crate::models::time::Timestamp;

/// Generate the base shifts for `definition` clipped to `[from, until)`.
///
/// The walk is anchored at the definition's own handover epoch, never at
/// `from`: owners are assigned by step index modulo the participant count,
/// counted from `handover_start_at`, so a given definition always yields
/// the same owner at a given instant regardless of the window queried.
/// Candidates are clipped to the window and dropped when nothing remains,
/// so the first and last shift may be shorter than the handover interval.
///
/// Fails with `InvalidDefinition` before generating anything if the
/// definition is malformed. An empty window (`from >= until`) or a window
/// entirely before the handover epoch yields an empty timeline.
pub fn generate_base_schedule(
    definition: &ScheduleDefinition,
    from: Timestamp,
    until: Timestamp,
) -> ScheduleResult<Vec<Shift>> {
    definition.validate()?;

    let interval = definition.handover_interval();
    let window = Period {
        start: from,
        end: until,
    };

    let mut shifts = Vec::new();
    let mut start = definition.handover_start_at;
    let mut idx: usize = 0;
    while start < until {
        let end = start + interval;
        let candidate = Period { start, end };
        if let Some(clipped) = candidate.clip(&window) {
            let user = definition.users[idx % definition.users.len()].clone();
            shifts.push(Shift::new(user, clipped.start, clipped.end));
        }
        start = end;
        idx += 1;
    }

    Ok(shifts)
}
