//! The uniform success/error wrapper every tool call returns.
//!
//! Exactly one content entry: the pretty-printed upstream JSON on success,
//! or an `Error: <message>` line with the `isError` flag on failure. Errors
//! never propagate past the handler boundary as protocol faults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl TextContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<TextContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    pub fn success(result: &Value) -> Self {
        let text = serde_json::to_string_pretty(result)
            .unwrap_or_else(|_| result.to_string());
        Self {
            content: vec![TextContent::text(text)],
            is_error: None,
        }
    }

    pub fn error(message: impl fmt::Display) -> Self {
        Self {
            content: vec![TextContent::text(format!("Error: {}", message))],
            is_error: Some(true),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.is_error.unwrap_or(false)
    }
}
