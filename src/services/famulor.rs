//! Authenticated HTTP adapter for the Famulor REST API.
//!
//! One outbound request per invocation. No retry, no pagination, no caching;
//! the response body is parsed as JSON and handed back untouched.

use crate::constants::api;
use crate::errors::ToolError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct FamulorClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl FamulorClient {
    /// Fails when the key is empty or whitespace-only, before any network
    /// call can be attempted.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, ToolError> {
        let key = api_key.trim();
        if key.is_empty() {
            return Err(ToolError::config(
                "Famulor API key is required. Please configure your API key in the app settings.",
            )
            .with_hint(format!("To get your API key: {}", api::API_KEYS_PAGE)));
        }
        let base = base_url.trim_end_matches('/').to_string();
        Url::parse(&base).map_err(|err| {
            ToolError::invalid_params(format!("Invalid Famulor base URL '{}': {}", base, err))
        })?;
        Ok(Self {
            http: Client::new(),
            api_key: key.to_string(),
            base_url: base,
        })
    }

    pub fn with_default_base_url(api_key: &str) -> Result<Self, ToolError> {
        Self::new(api_key, api::DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<Value, ToolError> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, ToolError> {
        let mut options = RequestOptions::new(Method::POST);
        if let Some(body) = body {
            options = options.with_body(body);
        }
        self.request(path, options).await
    }

    pub async fn put(&self, path: &str, body: Option<Value>) -> Result<Value, ToolError> {
        let mut options = RequestOptions::new(Method::PUT);
        if let Some(body) = body {
            options = options.with_body(body);
        }
        self.request(path, options).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ToolError> {
        self.request(path, RequestOptions::new(Method::DELETE))
            .await
    }

    /// The path carries its own query string; caller-supplied headers win
    /// over the defaults on conflict.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ToolError> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| ToolError::config("API key contains characters not valid in a header"))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| ToolError::invalid_params(format!("Invalid header name: {}", err)))?;
            let value = HeaderValue::from_str(value).map_err(|err| {
                ToolError::invalid_params(format!("Invalid header value: {}", err))
            })?;
            headers.insert(name, value);
        }

        let mut req = self.http.request(options.method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("").to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::http(status.as_u16(), &status_text, &body));
        }

        let text = response.text().await.map_err(map_reqwest_error)?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|err| {
            ToolError::internal(format!("Famulor API returned invalid JSON: {}", err))
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ToolError {
    if err.is_timeout() {
        ToolError::network(format!("Famulor API request timed out: {}", err))
    } else if err.is_connect() {
        ToolError::network(format!("Could not connect to the Famulor API: {}", err))
    } else {
        ToolError::network(format!("Famulor API request failed: {}", err))
    }
}
