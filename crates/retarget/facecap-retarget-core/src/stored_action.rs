//! JSON loading for baked actions.
//!
//! Hosts that bake their weight animation to JSON (see
//! `fixtures/actions/`) can load it back into the canonical [`Action`]
//! model here; validation runs before the data is handed out.

use crate::curve::Action;

/// Parse an action from its JSON form and validate channel invariants
/// (strictly increasing frames).
pub fn parse_action_json(raw: &str) -> Result<Action, String> {
    let action: Action = serde_json::from_str(raw).map_err(|e| format!("parse error: {e}"))?;
    for channel in &action.channels {
        channel.validate()?;
    }
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_action_json("not json").is_err());
    }

    #[test]
    fn parses_minimal_action() {
        let raw = r#"{"name":"Key|Take 001|Base Layer","channels":[]}"#;
        let action = parse_action_json(raw).unwrap();
        assert_eq!(action.name, "Key|Take 001|Base Layer");
        assert!(action.channels.is_empty());
    }
}
