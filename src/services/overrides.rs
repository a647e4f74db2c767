//! Override application.
//!
//! Layers caller-supplied overrides on top of base shifts, splitting shifts
//! at override boundaries. Wherever override intervals overlap each other,
//! the later entry in the input list wins.

use crate::api::{Override, Shift};
use crate::error::ScheduleResult;

/// Apply `overrides` to `base`, splitting shifts where coverage changes hands.
///
/// Each base shift is processed independently and expands, in start order,
/// into the sub-segments delimited by the overrides that intersect it; a
/// sorted, non-overlapping input therefore yields a sorted, non-overlapping
/// output. Sub-segments not covered by any override keep the base owner.
///
/// Precedence between overlapping overrides is positional: the entry with
/// the highest list index active over a sub-segment owns it, regardless of
/// which override started earlier or is shorter. Start/length never break
/// ties.
///
/// Fails with `InvalidOverride` before emitting anything if any override
/// has `start_at >= end_at`.
pub fn apply_overrides(base: &[Shift], overrides: &[Override]) -> ScheduleResult<Vec<Shift>> {
    for o in overrides {
        o.validate()?;
    }

    let mut result = Vec::with_capacity(base.len());
    for shift in base {
        let window = shift.period();

        // Overrides intersecting this shift, tagged with their list position.
        let relevant: Vec<(usize, &Override)> = overrides
            .iter()
            .enumerate()
            .filter(|(_, o)| o.period().overlaps(&window))
            .collect();
        if relevant.is_empty() {
            result.push(shift.clone());
            continue;
        }

        // Boundary points: the shift's edges plus every intersecting
        // override clipped to the shift. Sorted-unique merge over instants;
        // instant equality is exact, so no hashing.
        let mut points = vec![window.start, window.end];
        for (_, o) in &relevant {
            points.push(o.start_at.max(window.start));
            points.push(o.end_at.min(window.end));
        }
        points.sort();
        points.dedup();

        for pair in points.windows(2) {
            let (seg_start, seg_end) = (pair[0], pair[1]);
            if seg_start >= seg_end {
                continue;
            }
            // Covering test uses each override's original bounds, not the
            // clipped ones. Highest list position wins.
            let user = relevant
                .iter()
                .filter(|(_, o)| o.start_at <= seg_start && o.end_at >= seg_end)
                .max_by_key(|(position, _)| *position)
                .map(|(_, o)| o.user.clone())
                .unwrap_or_else(|| shift.user.clone());
            result.push(Shift::new(user, seg_start, seg_end));
        }
    }

    Ok(result)
}
