//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and validation.

use std::io::Write;

use fpuconf_core::HarnessError;
use fpuconf_core::config::*;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = HarnessConfig::default();
    assert_eq!(config.reset_cycles, 10);
    assert_eq!(config.max_wait_cycles, 10_000);
    assert_eq!(config.policy, MismatchPolicy::FailFast);
    assert_eq!(config.precision, Precision::F32);
    assert!(!config.trace_steps);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = HarnessConfig::from_json_str("{}").unwrap();
    assert_eq!(config, HarnessConfig::default());
}

#[test]
fn test_partial_json_overrides_only_given_fields() {
    let config =
        HarnessConfig::from_json_str(r#"{ "max_wait_cycles": 64, "policy": "collect_all" }"#)
            .unwrap();
    assert_eq!(config.max_wait_cycles, 64);
    assert_eq!(config.policy, MismatchPolicy::CollectAll);
    assert_eq!(config.reset_cycles, 10);
}

#[test]
fn test_full_json() {
    let json = r#"{
        "reset_cycles": 3,
        "max_wait_cycles": 200,
        "policy": "fail_fast",
        "precision": "f64",
        "trace_steps": true
    }"#;
    let config = HarnessConfig::from_json_str(json).unwrap();
    assert_eq!(
        config,
        HarnessConfig {
            reset_cycles: 3,
            max_wait_cycles: 200,
            policy: MismatchPolicy::FailFast,
            precision: Precision::F64,
            trace_steps: true,
        }
    );
}

#[test]
fn test_unknown_field_rejected() {
    let err = HarnessConfig::from_json_str(r#"{ "reset_cycle": 3 }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn test_bad_enum_value_rejected() {
    let err = HarnessConfig::from_json_str(r#"{ "precision": "f16" }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn test_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "reset_cycles": 4 }"#).unwrap();
    let config = HarnessConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.reset_cycles, 4);
}

#[test]
fn test_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HarnessConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, HarnessError::Io(_)));
}
