//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so configuration is
//! read with `option_env!` when the crate is compiled and parsed by the pure
//! helpers below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Location of the inventory backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `INVENTORY_API_BASE_URL`: backend origin, default `http://localhost:8080`
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("INVENTORY_API_BASE_URL"))
    }

    /// Build config from an optional raw base URL. Blank values use the default.
    pub fn with_base_url(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL, normalizing the slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(None)
    }
}

/// Parse a log level name, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
