//! Sparse request bodies for partial-update endpoints.
//!
//! A field lands in the outgoing body only when the caller supplied it, so
//! the server leaves everything else untouched. An explicit `null` is kept
//! distinct from omission, which is how a caller clears a nullable field.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct PatchBody {
    fields: Map<String, Value>,
}

impl PatchBody {
    /// Copy the listed fields out of an argument object, keeping only the
    /// ones that are actually present (explicit `null` included).
    pub fn from_args(args: &Value, field_names: &[&str]) -> Self {
        let mut fields = Map::new();
        if let Some(obj) = args.as_object() {
            for name in field_names {
                if let Some(value) = obj.get(*name) {
                    fields.insert((*name).to_string(), value.clone());
                }
            }
        }
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
