pub mod api {
    pub const DEFAULT_BASE_URL: &str = "https://app.famulor.de";
    pub const API_KEY_ENV: &str = "FAMULOR_API_KEY";
    pub const API_KEYS_PAGE: &str = "https://app.famulor.de/api-keys";
    pub const DEFAULT_CALL_LIST_LIMIT: u64 = 50;
}

pub mod suggestions {
    pub const MAX_TOOL_SUGGESTIONS: usize = 5;
    pub const MAX_FIELD_SUGGESTIONS: usize = 3;
}
