//! Per-call credential resolution.
//!
//! Credentials arrive from the hosting transport as an explicit [`CallContext`]
//! built once per tool call and never mutated afterwards. Resolution order:
//! the key supplied for this call, then the legacy configuration slot, then
//! the `FAMULOR_API_KEY` process environment variable (development fallback).
//! A missing key is always an explicit failure, never a silent default.

use crate::constants::api;
use crate::errors::ToolError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub famulor_api_key: Option<String>,
    #[serde(default)]
    pub oauth_token: Option<String>,
}

impl SessionConfig {
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            famulor_api_key: Some(key.into()),
            oauth_token: None,
        }
    }

    fn api_key(&self) -> Option<&str> {
        self.famulor_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    fn oauth_token(&self) -> Option<&str> {
        self.oauth_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub user: SessionConfig,
    pub legacy: SessionConfig,
}

impl CallContext {
    pub fn new(user: SessionConfig, legacy: SessionConfig) -> Self {
        Self { user, legacy }
    }
}

pub fn resolve_api_key(ctx: &CallContext) -> Result<String, ToolError> {
    if let Some(key) = ctx.user.api_key().or_else(|| ctx.legacy.api_key()) {
        return Ok(key.to_string());
    }

    if ctx.user.oauth_token().is_some() || ctx.legacy.oauth_token().is_some() {
        return Err(ToolError::config(
            "OAuth authentication detected but API key mapping is not implemented.",
        )
        .with_hint(format!(
            "Please use API key authentication. You can get your API key here: {}",
            api::API_KEYS_PAGE
        )));
    }

    if let Ok(key) = std::env::var(api::API_KEY_ENV) {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    Err(ToolError::config("Authentication not configured.").with_hint(format!(
        "Configure your API key in the app settings or set the {} environment variable. To get your API key: {}",
        api::API_KEY_ENV,
        api::API_KEYS_PAGE
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ToolErrorKind;

    #[test]
    fn user_key_wins_over_legacy_key() {
        let ctx = CallContext::new(
            SessionConfig::with_api_key("user-key"),
            SessionConfig::with_api_key("legacy-key"),
        );
        assert_eq!(resolve_api_key(&ctx).unwrap(), "user-key");
    }

    #[test]
    fn legacy_key_used_when_user_slot_empty() {
        let ctx = CallContext::new(
            SessionConfig::default(),
            SessionConfig::with_api_key("legacy-key"),
        );
        assert_eq!(resolve_api_key(&ctx).unwrap(), "legacy-key");
    }

    #[test]
    fn whitespace_key_is_treated_as_absent() {
        let ctx = CallContext::new(
            SessionConfig::with_api_key("   "),
            SessionConfig::with_api_key("legacy-key"),
        );
        assert_eq!(resolve_api_key(&ctx).unwrap(), "legacy-key");
    }

    #[test]
    fn oauth_only_config_is_an_explicit_failure() {
        let ctx = CallContext::new(
            SessionConfig {
                famulor_api_key: None,
                oauth_token: Some("tok".to_string()),
            },
            SessionConfig::default(),
        );
        let err = resolve_api_key(&ctx).unwrap_err();
        assert_eq!(err.kind, ToolErrorKind::Config);
        assert!(err.hint.unwrap().contains("api-keys"));
    }
}
