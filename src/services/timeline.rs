//! End-to-end schedule computation.
//!
//! Composes the three pure stages into the final on-call timeline.

use log::debug;

use crate::api::{Override, ScheduleDefinition, Shift};
use crate::error::ScheduleResult;
use crate::models::time::Timestamp;
use crate::services::coalesce::merge_adjacent;
use crate::services::overrides::apply_overrides;
use crate::services::rotation::generate_base_schedule;

/// Compute the final on-call timeline for `[from, until)`.
///
/// Equivalent to generating the base rotation, applying the overrides, and
/// coalescing the result. Fails eagerly on an invalid definition or
/// override; no partial timeline is ever returned.
pub fn compute_schedule(
    definition: &ScheduleDefinition,
    overrides: &[Override],
    from: Timestamp,
    until: Timestamp,
) -> ScheduleResult<Vec<Shift>> {
    let base = generate_base_schedule(definition, from, until)?;
    debug!("generated {} base shifts", base.len());

    let applied = apply_overrides(&base, overrides)?;
    debug!(
        "applied {} overrides, {} shifts after splitting",
        overrides.len(),
        applied.len()
    );

    let merged = merge_adjacent(applied);
    debug!("coalesced timeline to {} shifts", merged.len());

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::compute_schedule;
    use crate::api::{Override, Owner, ScheduleDefinition, Shift};
    use crate::models::time::{parse_timestamp, Timestamp};

    fn ts(s: &str) -> Timestamp {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_full_flow_with_override() {
        let definition = ScheduleDefinition::new(
            vec![Owner::from("alice"), Owner::from("bob"), Owner::from("charlie")],
            ts("2025-11-07T17:00:00Z"),
            7,
        );
        let overrides = vec![Override::new(
            "charlie",
            ts("2025-11-10T17:00:00Z"),
            ts("2025-11-10T22:00:00Z"),
        )];

        let timeline = compute_schedule(
            &definition,
            &overrides,
            ts("2025-11-07T17:00:00Z"),
            ts("2025-11-21T17:00:00Z"),
        )
        .unwrap();

        assert_eq!(
            timeline,
            vec![
                Shift::new("alice", ts("2025-11-07T17:00:00Z"), ts("2025-11-10T17:00:00Z")),
                Shift::new("charlie", ts("2025-11-10T17:00:00Z"), ts("2025-11-10T22:00:00Z")),
                Shift::new("alice", ts("2025-11-10T22:00:00Z"), ts("2025-11-14T17:00:00Z")),
                Shift::new("bob", ts("2025-11-14T17:00:00Z"), ts("2025-11-21T17:00:00Z")),
            ]
        );
    }

    #[test]
    fn test_override_spanning_handover_coalesces() {
        // An override crossing a handover boundary is split per base shift
        // by the applicator, then glued back into one run by the coalescer.
        let definition = ScheduleDefinition::new(
            vec![Owner::from("alice"), Owner::from("bob"), Owner::from("charlie")],
            ts("2025-11-07T17:00:00Z"),
            2,
        );
        let overrides = vec![Override::new(
            "maria",
            ts("2025-11-08T17:00:00Z"),
            ts("2025-11-13T22:00:00Z"),
        )];

        let timeline = compute_schedule(
            &definition,
            &overrides,
            ts("2025-11-07T17:00:00Z"),
            ts("2025-11-15T17:00:00Z"),
        )
        .unwrap();

        assert_eq!(
            timeline,
            vec![
                Shift::new("alice", ts("2025-11-07T17:00:00Z"), ts("2025-11-08T17:00:00Z")),
                Shift::new("maria", ts("2025-11-08T17:00:00Z"), ts("2025-11-13T22:00:00Z")),
                Shift::new("alice", ts("2025-11-13T22:00:00Z"), ts("2025-11-15T17:00:00Z")),
            ]
        );
    }
}
