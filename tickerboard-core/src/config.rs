//! Table display configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Decimal places for the volume column, shared by every market.
pub const FIXED_VOL_PRECISION: usize = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("thousands_separator must be a single character, got {0:?}")]
    Separator(String),
}

/// Display options injected into the ticker table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub volume_display_precision: usize,
    /// `None` disables grouping. Written as `""` or `"none"` in TOML.
    #[serde(
        serialize_with = "serialize_separator",
        deserialize_with = "deserialize_separator"
    )]
    pub thousands_separator: Option<char>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            volume_display_precision: FIXED_VOL_PRECISION,
            thousands_separator: Some(','),
        }
    }
}

impl TableConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: toml::Table = toml::from_str(content)?;
        if let Some(toml::Value::String(sep)) = raw.get("thousands_separator") {
            parse_separator(sep)?;
        }
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), ?config, "loaded table config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

fn parse_separator(raw: &str) -> Result<Option<char>, ConfigError> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(Some(ch)),
        _ => Err(ConfigError::Separator(raw.to_string())),
    }
}

fn deserialize_separator<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_separator(&raw).map_err(serde::de::Error::custom)
}

fn serialize_separator<S>(sep: &Option<char>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match sep {
        Some(ch) => serializer.serialize_str(&ch.to_string()),
        None => serializer.serialize_str("none"),
    }
}
