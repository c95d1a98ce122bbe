// src/config.rs
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR `{value}`: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Process-wide settings, read once at startup and handed to the router state.
#[derive(Clone)]
pub struct Config {
    /// `None` makes the chat endpoint answer 401 without calling upstream.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub bind_addr: SocketAddr,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::BindAddr { value: bind.clone(), source })?;

        Ok(Self {
            api_key: get("GEMINI_API_KEY"),
            api_base: get("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.bind_addr.port(), 3000);
    }

    #[test]
    fn blank_key_is_unset() {
        let cfg = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "   ")])).unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k-123"),
            ("GEMINI_API_BASE", "http://127.0.0.1:9999/v1/"),
            ("GEMINI_MODEL", "gemini-pro"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("k-123"));
        assert_eq!(cfg.api_base, "http://127.0.0.1:9999/v1");
        assert_eq!(cfg.model, "gemini-pro");
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn bad_bind_addr_is_an_error() {
        let err = Config::from_lookup(lookup(&[("BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains("not-an-addr"));
    }

    #[test]
    fn debug_hides_the_key() {
        let cfg = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "super-secret")])).unwrap();
        assert!(!format!("{:?}", cfg).contains("super-secret"));
    }
}
