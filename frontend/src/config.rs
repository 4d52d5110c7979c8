//! Build-time configuration of the REST endpoint.
//!
//! The frontend runs in the browser and cannot read the process
//! environment, so the values are baked in when the bundle is built:
//!
//! ```text
//! STUDENTS_API_BASE=https://records.example.org STUDENTS_API_TIMEOUT_MS=8000 trunk build
//! ```
//!
//! Missing or unparsable values fall back to `ApiConfig::default()`.

use common::config::ApiConfig;

pub fn load() -> ApiConfig {
    let defaults = ApiConfig::default();
    let base_url = option_env!("STUDENTS_API_BASE")
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .unwrap_or(defaults.base_url);
    let timeout_ms = option_env!("STUDENTS_API_TIMEOUT_MS")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(defaults.timeout_ms);
    ApiConfig::new(base_url, timeout_ms)
}
