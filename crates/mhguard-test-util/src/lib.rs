//! Shared test utilities for the mhguard workspace.
//!
//! `xtask` needs these at runtime (not behind `#[cfg(test)]`), so they live
//! in their own crate rather than in a test module.

use serde_json::{Value, json};
use std::path::PathBuf;

/// Root of the questionnaire fixtures (`<workspace>/tests/fixtures`).
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

/// Normalize non-deterministic report fields for comparison.
///
/// `tool.version` is replaced only when the root object is a report envelope
/// (has `schema`, `tool`, `run`, `verdict`, and `questionnaire_digest`).
/// Run timestamps and `duration_ms` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "run", "verdict", "questionnaire_digest"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool.contains_key("version")
        {
            tool.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_run_recursive(&mut value);
    value
}

fn normalize_run_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "ended_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_run_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_run_recursive(val);
            }
        }
        _ => {}
    }
}

/// Reduce a report to the shape stored in a fixture's `expected.json`:
/// verdict, the law list, and section sizes. `exit_code` is added by the caller.
pub fn summarize_report(report: &Value) -> Value {
    let len = |key: &str| report[key].as_array().map_or(0, Vec::len);
    json!({
        "verdict": report["verdict"],
        "applicable_laws": report["applicable_laws"],
        "warnings": len("warnings"),
        "required_actions": len("required_actions"),
        "recommendations": len("recommendations"),
        "resources": len("resources"),
    })
}
