//! Adapter configuration.
//!
//! Credentials for each backend; either section may be omitted to run
//! single-platform. Tokens are kept behind [`Secret`] and redacted from
//! `Debug` output.

use std::path::Path;

use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Credentials for the Discord connection.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    pub client_id: String,
    #[serde(serialize_with = "serialize_secret")]
    pub client_secret: Secret<String>,
    /// Bot token.
    #[serde(serialize_with = "serialize_secret")]
    pub token: Secret<String>,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: Secret::new(String::new()),
            token: Secret::new(String::new()),
        }
    }
}

/// Credentials for the Revolt connection.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevoltConfig {
    /// Bot token.
    #[serde(serialize_with = "serialize_secret")]
    pub token: Secret<String>,
}

impl std::fmt::Debug for RevoltConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevoltConfig")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Default for RevoltConfig {
    fn default() -> Self {
        Self {
            token: Secret::new(String::new()),
        }
    }
}

/// Top-level adapter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub discord: Option<DiscordConfig>,
    pub revolt: Option<RevoltConfig>,
}

impl AdapterConfig {
    /// Parse from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }
}

/// Configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn serialize_secret<S: serde::Serializer>(
    secret: &Secret<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_sections() {
        let config = AdapterConfig::from_toml(
            r#"
            [discord]
            client_id = "123"
            client_secret = "shh"
            token = "d-token"

            [revolt]
            token = "r-token"
            "#,
        )
        .unwrap();
        let discord = config.discord.unwrap();
        assert_eq!(discord.client_id, "123");
        assert_eq!(discord.token.expose_secret(), "d-token");
        assert_eq!(config.revolt.unwrap().token.expose_secret(), "r-token");
    }

    #[test]
    fn sections_are_optional() {
        let config = AdapterConfig::from_toml("[revolt]\ntoken = \"r\"\n").unwrap();
        assert!(config.discord.is_none());
        assert!(config.revolt.is_some());
    }

    #[test]
    fn debug_redacts_tokens() {
        let config = AdapterConfig::from_toml(
            "[discord]\nclient_id = \"123\"\ntoken = \"very-secret\"\n",
        )
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("very-secret"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = AdapterConfig::from_toml("not toml [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
