//! Typed extraction from untyped tool-call argument objects.
//!
//! Catalog schema validation runs before dispatch, so these mostly guard the
//! programming contract; the errors they produce still name the field so a
//! misbehaving client gets something actionable back.

use crate::errors::ToolError;
use serde_json::Value;

pub fn require_str<'a>(args: &'a Value, field: &str) -> Result<&'a str, ToolError> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(field, "string"))
}

pub fn require_i64(args: &Value, field: &str) -> Result<i64, ToolError> {
    args.get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| missing(field, "number"))
}

pub fn optional_str<'a>(args: &'a Value, field: &str) -> Option<&'a str> {
    args.get(field).and_then(Value::as_str)
}

pub fn optional_u64(args: &Value, field: &str) -> Option<u64> {
    args.get(field).and_then(Value::as_u64)
}

pub fn optional_object(args: &Value, field: &str) -> Option<Value> {
    args.get(field).filter(|v| v.is_object()).cloned()
}

pub fn optional_array(args: &Value, field: &str) -> Option<Value> {
    args.get(field).filter(|v| v.is_array()).cloned()
}

pub fn optional_bool(args: &Value, field: &str) -> Option<bool> {
    args.get(field).and_then(Value::as_bool)
}

fn missing(field: &str, expected: &str) -> ToolError {
    ToolError::invalid_params(format!(
        "Missing or invalid required argument '{}' (expected {})",
        field, expected
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_str_reports_the_field_name() {
        let err = require_str(&json!({}), "assistant_id").unwrap_err();
        assert!(err.message.contains("assistant_id"));
    }

    #[test]
    fn require_str_rejects_wrong_type() {
        assert!(require_str(&json!({"assistant_id": 42}), "assistant_id").is_err());
    }

    #[test]
    fn optional_u64_absent_is_none() {
        assert_eq!(optional_u64(&json!({}), "limit"), None);
        assert_eq!(optional_u64(&json!({"limit": 5}), "limit"), Some(5));
    }
}
