use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ReelError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_web_base_url")]
    pub web_base_url: String,
    /// Environment variable holding the API read access token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub include_adult: bool,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_web_base_url() -> String {
    "https://www.themoviedb.org".to_string()
}

fn default_token_env() -> String {
    "TMDB_API_TOKEN".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            web_base_url: default_web_base_url(),
            token_env: default_token_env(),
            language: default_language(),
            include_adult: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("reel").join("config.toml"))
}

impl Config {
    /// Load from the default location, falling back to defaults if the file
    /// is missing or malformed.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Config::default();
        };

        match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Config::default()
            }
        }
    }

    /// Resolve the bearer token from the configured environment variable.
    pub fn resolve_token(&self) -> Result<String> {
        match std::env::var(&self.api.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(ReelError::Auth(format!(
                "{} environment variable not set",
                self.api.token_env
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config() {
        let toml_str = r#"
[api]
base_url = "https://tmdb-proxy.internal/3"
token_env = "MOVIE_TOKEN"
language = "de-DE"
include_adult = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://tmdb-proxy.internal/3");
        assert_eq!(config.api.token_env, "MOVIE_TOKEN");
        assert_eq!(config.api.language, "de-DE");
        assert!(config.api.include_adult);
        // Unspecified fields keep their defaults.
        assert_eq!(config.api.image_base_url, "https://image.tmdb.org/t/p/w500");
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.api.token_env, "TMDB_API_TOKEN");
        assert_eq!(config.api.language, "en-US");
        assert!(!config.api.include_adult);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/reel/config.toml"));
        assert_eq!(config.api.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn resolve_token_reads_configured_env_var() {
        let mut config = Config::default();
        config.api.token_env = "REEL_TEST_TOKEN".to_string();

        std::env::set_var("REEL_TEST_TOKEN", "  abc123  ");
        assert_eq!(config.resolve_token().unwrap(), "abc123");
        std::env::remove_var("REEL_TEST_TOKEN");
    }

    #[test]
    fn resolve_token_fails_when_unset() {
        let mut config = Config::default();
        config.api.token_env = "REEL_TEST_TOKEN_UNSET".to_string();
        std::env::remove_var("REEL_TEST_TOKEN_UNSET");

        let err = config.resolve_token().unwrap_err();
        assert!(err.to_string().contains("REEL_TEST_TOKEN_UNSET"));
    }
}
