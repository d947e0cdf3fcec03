use crate::errors::ToolError;

/// Ordered query-string builder. Pairs are appended in insertion order so
/// request paths stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt(&mut self, key: &str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append to a bare path: `/api/user/calls` + `limit=50` →
    /// `/api/user/calls?limit=50`. A pairless builder returns the path as is.
    pub fn append_to(&self, path: &str) -> Result<String, ToolError> {
        if self.pairs.is_empty() {
            return Ok(path.to_string());
        }
        let encoded = serde_urlencoded::to_string(&self.pairs)
            .map_err(|err| ToolError::internal(format!("Could not encode query: {}", err)))?;
        Ok(format!("{}?{}", path, encoded))
    }
}
