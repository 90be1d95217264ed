use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub const DEFAULT_HOST: &str = "http://localhost:7700";

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

/// Connection settings for a Meilisearch server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host_url: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn new(host_url: impl Into<String>, api_key: Option<&str>) -> Self {
        Self {
            host_url: host_url.into(),
            api_key: api_key.map(str::to_string),
        }
    }

    /// Reads `MEILI_HOST` and `MEILI_MASTER_KEY`, loading a `.env` file first if present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Config {
            host_url: get_env_or_default("MEILI_HOST", DEFAULT_HOST),
            api_key: get_env_opt("MEILI_MASTER_KEY"),
        }
    }

    /// Host URL without the trailing slash, ready to have paths appended.
    pub fn base_url(&self) -> &str {
        self.host_url.trim_end_matches('/')
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_strips_trailing_slashes() {
        let config = Config::new("http://localhost:7700/", None);
        assert_eq!(config.base_url(), "http://localhost:7700");

        let config = Config::new("http://localhost:7700", Some("masterKey"));
        assert_eq!(config.base_url(), "http://localhost:7700");
        assert_eq!(config.api_key.as_deref(), Some("masterKey"));
    }
}
