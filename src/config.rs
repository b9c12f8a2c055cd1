use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required but not set")]
    MissingVar(&'static str),
}

/// Runtime settings for the listing service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub completions_url: String,
    pub api_key: String,
    pub model: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = lookup("COMPLETIONS_API_KEY")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar("COMPLETIONS_API_KEY"))?;

        let completions_url = lookup("COMPLETIONS_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMPLETIONS_URL.to_string());

        let model = lookup("COMPLETIONS_MODEL").filter(|value| !value.trim().is_empty());

        Ok(Self {
            port,
            completions_url,
            api_key,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("COMPLETIONS_API_KEY", "sk-test")])).unwrap();

        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.completions_url, DEFAULT_COMPLETIONS_URL);
        assert_eq!(cfg.api_key, "sk-test");
        assert!(cfg.model.is_none());
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8081"),
            ("COMPLETIONS_API_KEY", "sk-test"),
            ("COMPLETIONS_URL", "http://127.0.0.1:9000/v1/completions"),
            ("COMPLETIONS_MODEL", "gpt-3.5-turbo-instruct"),
        ]))
        .unwrap();

        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.completions_url, "http://127.0.0.1:9000/v1/completions");
        assert_eq!(cfg.model.as_deref(), Some("gpt-3.5-turbo-instruct"));
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("COMPLETIONS_API_KEY", "sk-test"),
        ]))
        .unwrap();

        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        let missing = AppConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(
            missing,
            Err(ConfigError::MissingVar("COMPLETIONS_API_KEY"))
        ));

        let blank = AppConfig::from_lookup(lookup_from(&[("COMPLETIONS_API_KEY", "  ")]));
        assert!(blank.is_err());
    }
}
