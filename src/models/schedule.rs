// ============================================================================
// JSON Parsing Functions
// ============================================================================
//
// String-based parsing for rotation definitions and override lists. Loading
// the bytes from disk or elsewhere is the caller's concern; everything here
// takes JSON text and returns validated value types.

use anyhow::{Context, Result};

use crate::api::{Override, ScheduleDefinition};

fn validate_input_definition(definition_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(definition_json).context("Invalid schedule definition JSON")?;
    let has_users = value.as_object().and_then(|obj| obj.get("users")).is_some();
    if !has_users {
        anyhow::bail!("Missing required 'users' field");
    }
    Ok(())
}

/// Parse a rotation definition from a JSON string.
///
/// Expected shape:
///
/// ```json
/// {
///   "users": ["alice", "bob", "charlie"],
///   "handover_start_at": "2025-11-07T17:00:00Z",
///   "handover_interval_days": 7
/// }
/// ```
///
/// Validation is eager: `users` must be non-empty and
/// `handover_interval_days` strictly positive, and a missing
/// `handover_start_at` is a deserialization error.
pub fn parse_definition_json_str(definition_json: &str) -> Result<ScheduleDefinition> {
    validate_input_definition(definition_json)?;

    let definition: ScheduleDefinition = serde_json::from_str(definition_json)
        .context("Failed to deserialize schedule definition using Serde")?;
    definition.validate()?;

    Ok(definition)
}

/// Parse an override list from a JSON string.
///
/// Accepts either a wrapper `{"overrides": [ ... ]}` or a bare array of
/// override objects. List order is preserved: it encodes precedence when
/// override intervals overlap.
pub fn parse_overrides_json_str(overrides_json: &str) -> Result<Vec<Override>> {
    #[derive(serde::Deserialize)]
    struct OverridesWrapper {
        overrides: Vec<Override>,
    }

    let trimmed = overrides_json.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Empty overrides JSON");
    }

    // Try the wrapper form first, then the bare array form.
    let overrides = match serde_json::from_str::<OverridesWrapper>(trimmed) {
        Ok(wrapper) => wrapper.overrides,
        Err(_) => {
            log::debug!("overrides JSON has no 'overrides' wrapper, trying bare array");
            serde_json::from_str::<Vec<Override>>(trimmed)
                .context("Failed to deserialize overrides using Serde")?
        }
    };

    for o in &overrides {
        o.validate()?;
    }

    Ok(overrides)
}

// ============================================================================
// Tests
// ============================================================================
