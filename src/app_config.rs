use crate::error::{OiError, OiResult};
use crate::narrative::openai_client::OPENAI_BASE_URL;
use crate::nse::config::NSE_BASE_URL;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Serve the HTTP front end
    Server,
    /// Run the pipeline once and print the post
    Once,
}

/// Application configuration handler
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: RunMode,
    pub host: String,
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub nse_base_url: String,
}

impl AppConfig {
    /// Create new configuration from environment variables
    pub fn from_env() -> OiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> OiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| OiError::ConfigurationMissing("OPENAI_API_KEY is not set".to_string()))?;

        let mode = match lookup("OI_MODE").as_deref().map(str::trim) {
            None | Some("") | Some("server") => RunMode::Server,
            Some("once") => RunMode::Once,
            Some(other) => {
                return Err(OiError::ConfigurationMissing(format!(
                    "invalid OI_MODE '{}', use 'server' or 'once'",
                    other
                )));
            }
        };

        let port = match lookup("OI_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                OiError::ConfigurationMissing(format!("invalid OI_PORT '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mode,
            host: lookup("OI_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            openai_api_key,
            openai_base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            nse_base_url: lookup("NSE_BASE_URL").unwrap_or_else(|| NSE_BASE_URL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, OiError::ConfigurationMissing(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, OiError::ConfigurationMissing(_)));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.mode, RunMode::Server);
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
        assert_eq!(config.nse_base_url, NSE_BASE_URL);
        assert_eq!(config.openai_base_url, OPENAI_BASE_URL);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OI_MODE", "once"),
            ("OI_HOST", "0.0.0.0"),
            ("OI_PORT", "8080"),
            ("NSE_BASE_URL", "http://127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(config.mode, RunMode::Once);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.nse_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_values() {
        assert!(AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "k"), ("OI_PORT", "abc")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "k"), ("OI_MODE", "batch")])).is_err());
    }
}
