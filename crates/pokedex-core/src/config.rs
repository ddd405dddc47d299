//! ============================================================================
//! Configuration - Environment-driven settings
//! ============================================================================
//! POKEDEX_API_URL        API base (default https://pokeapi.co/api/v2)
//! POKEDEX_CATALOG_LIMIT  Catalog size (default 151)
//! POKEDEX_PACING_MS      Delay before a lookup result is shown (default 2000)
//! POKEDEX_DB_PATH        Database file (default ~/.pokedex/pokedex.redb)
//! ============================================================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::types::PokedexError;

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_CATALOG_LIMIT: u32 = 151;
pub const DEFAULT_PACING_MS: u64 = 2000;

/// Runtime configuration for the viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexConfig {
    /// Base URL without trailing slash
    pub api_base_url: String,
    /// Number of entries requested for the catalog list
    pub catalog_limit: u32,
    /// Pacing delay applied after every lookup, in milliseconds
    pub pacing_ms: u64,
    /// Database file override; None means the default under the home directory
    pub db_path: Option<PathBuf>,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            pacing_ms: DEFAULT_PACING_MS,
            db_path: None,
        }
    }
}

impl PokedexConfig {
    /// Build from process environment, falling back to defaults
    pub fn from_env() -> Result<Self, PokedexError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PokedexError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("POKEDEX_API_URL") {
            config.api_base_url = url;
        }
        if let Some(limit) = lookup("POKEDEX_CATALOG_LIMIT") {
            config.catalog_limit = limit.trim().parse().map_err(|_| {
                PokedexError::InvalidConfig(format!("POKEDEX_CATALOG_LIMIT is not a number: {}", limit))
            })?;
        }
        if let Some(pacing) = lookup("POKEDEX_PACING_MS") {
            config.pacing_ms = pacing.trim().parse().map_err(|_| {
                PokedexError::InvalidConfig(format!("POKEDEX_PACING_MS is not a number: {}", pacing))
            })?;
        }
        if let Some(path) = lookup("POKEDEX_DB_PATH") {
            config.db_path = Some(PathBuf::from(path));
        }

        config.validate()
    }

    /// Normalize the base URL and reject unusable values
    pub fn validate(mut self) -> Result<Self, PokedexError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(PokedexError::InvalidConfig("API base URL is empty".into()));
        }
        url::Url::parse(trimmed).map_err(|e| {
            PokedexError::InvalidConfig(format!("API base URL '{}' is invalid: {}", trimmed, e))
        })?;
        self.api_base_url = trimmed.to_string();

        if self.catalog_limit == 0 {
            return Err(PokedexError::InvalidConfig("catalog limit must be at least 1".into()));
        }

        Ok(self)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PokedexConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog_limit, 151);
        assert_eq!(config.pacing(), Duration::from_millis(2000));
        assert!(config.db_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = PokedexConfig::from_lookup(lookup_from(&[
            ("POKEDEX_API_URL", "http://localhost:8080/api/v2/"),
            ("POKEDEX_CATALOG_LIMIT", "20"),
            ("POKEDEX_PACING_MS", "0"),
            ("POKEDEX_DB_PATH", "/tmp/dex.redb"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.catalog_limit, 20);
        assert_eq!(config.pacing_ms, 0);
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/dex.redb")));
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_limit = PokedexConfig::from_lookup(lookup_from(&[("POKEDEX_CATALOG_LIMIT", "lots")]));
        assert!(matches!(bad_limit, Err(PokedexError::InvalidConfig(_))));

        let zero_limit = PokedexConfig::from_lookup(lookup_from(&[("POKEDEX_CATALOG_LIMIT", "0")]));
        assert!(matches!(zero_limit, Err(PokedexError::InvalidConfig(_))));

        let bad_url = PokedexConfig::from_lookup(lookup_from(&[("POKEDEX_API_URL", "not a url")]));
        assert!(matches!(bad_url, Err(PokedexError::InvalidConfig(_))));
    }
}
