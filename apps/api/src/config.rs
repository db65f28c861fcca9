use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_MESSAGE_CHARS: usize = 2000;
const DEFAULT_SURFACED_SUGGESTIONS: usize = 2;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, chat answers come from the rule-based engine only.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_message_chars: usize,
    /// How many follow-up suggestions the chat endpoint returns.
    pub surfaced_suggestions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            anthropic_api_key: optional_var(&lookup, "ANTHROPIC_API_KEY"),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            rust_log: optional_var(&lookup, "RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_message_chars: parse_var(
                &lookup,
                "CHAT_MAX_MESSAGE_CHARS",
                DEFAULT_MAX_MESSAGE_CHARS,
            )?,
            surfaced_suggestions: parse_var(
                &lookup,
                "CHAT_SURFACED_SUGGESTIONS",
                DEFAULT_SURFACED_SUGGESTIONS,
            )?,
        })
    }
}

/// Blank values count as unset.
fn optional_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_var(lookup, key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
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
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_message_chars, 2000);
        assert_eq!(config.surfaced_suggestions, 2);
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = config_from(&[("ANTHROPIC_API_KEY", "   ")]).unwrap();
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_explicit_values_are_used() {
        let config = config_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("PORT", "9090"),
            ("RUST_LOG", "debug"),
            ("CHAT_MAX_MESSAGE_CHARS", "500"),
            ("CHAT_SURFACED_SUGGESTIONS", "4"),
        ])
        .unwrap();
        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_message_chars, 500);
        assert_eq!(config.surfaced_suggestions, 4);
    }

    #[test]
    fn test_invalid_port_fails_with_key_in_message() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
