use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_POSTER_URL: &str = "https://i.ytimg.com/vi/ogfYd705cRs/hqdefault.jpg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Poster shown when an element has no `poster-url` attribute.
    pub default_poster_url: String,
    pub user_agent: String,
    /// Warm-up request timeout in seconds.
    pub timeout: u64,
    /// Whether the HTTP warmer actually contacts hinted origins.
    pub warm_connections: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_poster_url: DEFAULT_POSTER_URL.to_string(),
            user_agent: format!("lite-embed/{}", env!("CARGO_PKG_VERSION")),
            timeout: 10,
            warm_connections: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("timeout = 3\nwarm_connections = false\n").unwrap();
        assert_eq!(config.timeout, 3);
        assert!(!config.warm_connections);
        assert_eq!(config.default_poster_url, DEFAULT_POSTER_URL);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("timeout = \"soon\"").is_err());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
