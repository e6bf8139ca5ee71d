//! Configuration Tests.
//!
//! Default values and partial-JSON deserialization.

use pretty_assertions::assert_eq;

use ls8_core::Config;

#[test]
fn defaults_are_quiet_and_unbounded() {
    let config = Config::default();
    assert!(!config.trace_instructions);
    assert_eq!(config.max_instructions, None);
    assert_eq!(config.start_pc, 0);
}

#[test]
fn partial_json_fills_in_defaults() {
    let config: Config = serde_json::from_str(r#"{"trace_instructions": true}"#).expect("valid");
    assert!(config.trace_instructions);
    assert_eq!(config.max_instructions, None);
    assert_eq!(config.start_pc, 0);
}

#[test]
fn budget_and_start_pc_deserialize() {
    let config: Config =
        serde_json::from_str(r#"{"max_instructions": 1000, "start_pc": 3}"#).expect("valid");
    assert_eq!(config.max_instructions, Some(1000));
    assert_eq!(config.start_pc, 3);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<Config>(r#"{"no_such_knob": 1}"#).is_err());
}
