//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so settings are baked
//! in through `option_env!` when the bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Gateway base URL without a trailing slash.
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `OVERCLOCKART_API_URL`: default `http://localhost:8000`
    /// - `OVERCLOCKART_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("OVERCLOCKART_API_URL"), option_env!("OVERCLOCKART_LOG_LEVEL"))
    }

    pub fn from_raw(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self { api_base_url: parse_base_url(api_base_url), log_level: parse_log_level(log_level) }
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
