//! Runtime configuration: API key and endpoint
//!
//! Sources, later ones win:
//!   1. built-in defaults
//!   2. `<config dir>/skyquery/config.json`
//!   3. `SKYQUERY_API_KEY` / `SKYQUERY_API_BASE`

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.api-ninjas.com/v1/";

const ENV_API_KEY: &str = "SKYQUERY_API_KEY";
const ENV_API_BASE: &str = "SKYQUERY_API_BASE";

/// Settings handed to [`crate::backend::api::AstroClient`].
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: Url,
}

/// On-disk form, every field optional.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
}

impl Config {
    /// Load from the config file (if any) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match config_path() {
            Some(path) if path.exists() => read_file(&path)?,
            _ => ConfigFile::default(),
        };

        let config = Self::from_sources(
            file,
            std::env::var(ENV_API_KEY).ok(),
            std::env::var(ENV_API_BASE).ok(),
        )?;
        if config.api_key.is_empty() {
            tracing::warn!("No API key configured (set {} or api_key in the config file)", ENV_API_KEY);
        }
        Ok(config)
    }

    /// Merge file values with environment values. Blank environment
    /// values are treated as unset.
    pub fn from_sources(
        file: ConfigFile,
        env_key: Option<String>,
        env_base: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = non_blank(env_key).or(non_blank(file.api_key));
        let api_base = non_blank(env_base).or(non_blank(file.api_base));
        Self::from_parts(api_key, api_base.as_deref())
    }

    pub fn from_parts(api_key: Option<String>, api_base: Option<&str>) -> Result<Self, ConfigError> {
        let api_base = parse_base(api_base.unwrap_or(DEFAULT_API_BASE))?;
        Ok(Self {
            api_key: api_key.unwrap_or_default().trim().to_string(),
            api_base,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Location of the optional config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skyquery").join("config.json"))
}

fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded config from {:?}", path);
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Routes are joined onto the base, so its path must end in `/` and it
/// carries no query or fragment of its own.
fn parse_base(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|source| ConfigError::BaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase {
            url: raw.to_string(),
        });
    }

    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_parts(None, None).unwrap();
        assert_eq!(config.api_key, "");
        assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_base_gets_trailing_slash() {
        let config = Config::from_parts(Some("k".into()), Some("http://localhost:8080/v1")).unwrap();
        assert_eq!(config.api_base.as_str(), "http://localhost:8080/v1/");
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            Config::from_parts(None, Some("not a url")),
            Err(ConfigError::BaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_query_and_fragment_dropped() {
        let config = Config::from_parts(None, Some("https://h/v1?x=1#top")).unwrap();
        assert_eq!(config.api_base.as_str(), "https://h/v1/");
    }

    #[test]
    fn test_base_that_cannot_hold_routes() {
        assert!(matches!(
            Config::from_parts(None, Some("mailto:someone@example.com")),
            Err(ConfigError::NotABase { .. })
        ));
    }

    fn file(key: Option<&str>, base: Option<&str>) -> ConfigFile {
        ConfigFile {
            api_key: key.map(String::from),
            api_base: base.map(String::from),
        }
    }

    #[test]
    fn test_sources_defaults_when_nothing_set() {
        let config = Config::from_sources(ConfigFile::default(), None, None).unwrap();
        assert_eq!(config.api_key, "");
        assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_sources_file_over_defaults() {
        let config = Config::from_sources(
            file(Some("from-file"), Some("http://file.example/api/")),
            None,
            None,
        )
        .unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.api_base.as_str(), "http://file.example/api/");
    }

    #[test]
    fn test_sources_env_over_file() {
        let config = Config::from_sources(
            file(Some("from-file"), Some("http://file.example/api/")),
            Some("from-env".to_string()),
            Some("http://env.example/v2".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.api_base.as_str(), "http://env.example/v2/");
    }

    #[test]
    fn test_sources_blank_env_keeps_file_values() {
        let config = Config::from_sources(
            file(Some("from-file"), Some("http://file.example/api/")),
            Some(String::new()),
            Some("   ".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.api_base.as_str(), "http://file.example/api/");
    }

    #[test]
    fn test_config_file_fields_optional() {
        let file: ConfigFile = serde_json::from_str(r#"{"api_key":"abc"}"#).unwrap();
        assert_eq!(file.api_key.as_deref(), Some("abc"));
        assert!(file.api_base.is_none());
    }
}
