//! Adjacent shift coalescing.

use crate::api::Shift;

/// Merge consecutive same-owner shifts that touch with no gap.
///
/// Single pass: the current output shift is extended while the next input
/// shift has the same owner and starts exactly at the current end;
/// otherwise it is closed out and a new one started. Total covered
/// duration and ownership are preserved, only the segment count changes,
/// and the pass is idempotent.
///
/// Input is assumed sorted by start and non-overlapping; that precondition
/// is not re-validated here.
pub fn merge_adjacent(shifts: Vec<Shift>) -> Vec<Shift> {
    let mut merged: Vec<Shift> = Vec::with_capacity(shifts.len());
    for shift in shifts {
        match merged.last_mut() {
            Some(last) if last.user == shift.user && last.end_at == shift.start_at => {
                last.end_at = shift.end_at;
            }
            _ => merged.push(shift),
        }
    }
    merged
}
