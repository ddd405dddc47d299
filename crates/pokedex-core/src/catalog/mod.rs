//! ============================================================================
//! Catalog Module - Remote catalog access
//! ============================================================================
//! - CatalogApi: interface the session drives (real client or a fake)
//! - CatalogClient: reqwest implementation against the PokeAPI
//! - resolve_locator: turns user input into a detail locator
//! ============================================================================

mod client;

pub use client::CatalogClient;

use async_trait::async_trait;

use crate::types::{CatalogEntry, ItemDetail, PokedexError};

/// Read-only access to the remote catalog
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the fixed-size catalog list. One request, no retry.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, PokedexError>;

    /// Fetch one item by locator or bare name. One request, no retry.
    async fn fetch_detail(&self, locator_or_name: &str) -> Result<ItemDetail, PokedexError>;

    /// Canonical locator for an item id
    fn locator_for_id(&self, id: u32) -> String;
}

/// Resolve lookup input into a locator.
///
/// Absolute http(s) URLs pass through untouched. Anything else is treated as a
/// bare name or id: trimmed, lower-cased and appended to `<base>/pokemon/`.
pub fn resolve_locator(api_base_url: &str, input: &str) -> String {
    let input = input.trim();
    if let Ok(parsed) = url::Url::parse(input) {
        if matches!(parsed.scheme(), "http" | "https") {
            return input.to_string();
        }
    }

    let name = input.to_lowercase();
    format!(
        "{}/pokemon/{}",
        api_base_url.trim_end_matches('/'),
        urlencoding::encode(&name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://pokeapi.co/api/v2";

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        assert_eq!(resolve_locator(BASE, "PIKA"), resolve_locator(BASE, "pika"));
        assert_eq!(resolve_locator(BASE, "Pikachu"), "https://pokeapi.co/api/v2/pokemon/pikachu");
    }

    #[test]
    fn test_locator_passes_through() {
        let url = "https://pokeapi.co/api/v2/pokemon/25/";
        assert_eq!(resolve_locator(BASE, url), url);
        assert_eq!(
            resolve_locator(BASE, "http://localhost:9000/pokemon/1"),
            "http://localhost:9000/pokemon/1"
        );
    }

    #[test]
    fn test_ids_and_whitespace() {
        assert_eq!(resolve_locator(BASE, " 25 "), "https://pokeapi.co/api/v2/pokemon/25");
        assert_eq!(resolve_locator("https://example.test/api/", "1"), "https://example.test/api/pokemon/1");
    }

    #[test]
    fn test_names_are_path_encoded() {
        assert_eq!(
            resolve_locator(BASE, "Mr Mime"),
            "https://pokeapi.co/api/v2/pokemon/mr%20mime"
        );
    }
}
