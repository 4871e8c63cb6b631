use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_SUGGESTION_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Nothing here is required: a missing API key only disables suggestions.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Session-signing secret. Reserved for the HTML front end; the JSON API is stateless.
    #[allow(dead_code)]
    pub secret_key: Option<String>,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub upload_dir: PathBuf,
    pub suggestion_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            secret_key: get("SECRET_KEY"),
            port: parse_or(get("PORT"), DEFAULT_PORT, "PORT must be a valid port number")?,
            max_upload_bytes: parse_or(
                get("MAX_UPLOAD_BYTES"),
                DEFAULT_MAX_UPLOAD_BYTES,
                "MAX_UPLOAD_BYTES must be a byte count",
            )?,
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            suggestion_timeout_secs: parse_or(
                get("SUGGESTION_TIMEOUT_SECS"),
                DEFAULT_SUGGESTION_TIMEOUT_SECS,
                "SUGGESTION_TIMEOUT_SECS must be a whole number of seconds",
            )?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn suggestions_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn parse_or<T>(value: Option<String>, default: T, message: &'static str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw.trim().parse::<T>().context(message),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.suggestion_timeout_secs, 60);
        assert!(config.gemini_api_key.is_none());
        assert!(!config.suggestions_enabled());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("GEMINI_API_KEY", "   ")]).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("SECRET_KEY", "s3cret"),
            ("PORT", "8080"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("UPLOAD_DIR", "/tmp/ats"),
            ("SUGGESTION_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("abc"));
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.secret_key.as_deref(), Some("s3cret"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/ats"));
        assert_eq!(config.suggestion_timeout_secs, 5);
        assert!(config.suggestions_enabled());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
