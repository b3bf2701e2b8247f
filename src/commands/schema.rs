use crate::commands::CommandResult;
use hira_fte::components::availability::AvailabilityOverride;
use schemars::schema_for;

/// JSON schema of an override list, as accepted by `project`
pub fn run() -> CommandResult {
    let schema = schema_for!(Vec<AvailabilityOverride>);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_override_fields() {
        let output = run().unwrap();
        let schema: serde_json::Value = serde_json::from_str(&output).unwrap();
        let properties = &schema["definitions"]["AvailabilityOverride"]["properties"];
        assert!(properties.get("type").is_some());
        assert!(properties.get("start").is_some());
        assert!(properties.get("fte").is_some());
    }
}
