use serde::{Deserialize, Serialize};

/// Path of the student collection relative to the API base URL.
pub const COLLECTION_PATH: &str = "/students";

/// Where the student collection lives and how long a request may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout_ms: 5000,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    /// `GET`/`POST` target, e.g. `http://localhost:3001/students`.
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), COLLECTION_PATH)
    }

    /// `GET`/`PUT`/`DELETE` target for a single record.
    pub fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id.trim_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_server() {
        let config = ApiConfig::default();
        assert_eq!(config.collection_url(), "http://localhost:3001/students");
        assert_eq!(config.record_url("7"), "http://localhost:3001/students/7");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let config = ApiConfig::new("https://api.example.org/v1/", 1000);
        assert_eq!(config.collection_url(), "https://api.example.org/v1/students");
        assert_eq!(config.record_url("12"), "https://api.example.org/v1/students/12");
    }

    #[test]
    fn empty_base_yields_relative_urls() {
        let config = ApiConfig::new("", 1000);
        assert_eq!(config.collection_url(), "/students");
        assert_eq!(config.record_url("3"), "/students/3");
    }
}
