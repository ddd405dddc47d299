//! ============================================================================
//! Catalog Client - PokeAPI over HTTP
//! ============================================================================
//! GET <base>/pokemon?limit=N          -> catalog list
//! GET <base>/pokemon/<id-or-name>     -> item detail
//! ============================================================================

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{resolve_locator, CatalogApi};
use crate::config::PokedexConfig;
use crate::types::{CatalogEntry, ItemDetail, PokedexError, Stat, TypeName};

/// Client for the remote catalog API
pub struct CatalogClient {
    client: reqwest::Client,
    api_base_url: String,
    catalog_limit: u32,
}

impl CatalogClient {
    pub fn new(config: &PokedexConfig) -> Self {
        Self::with_base_url(&config.api_base_url, config.catalog_limit)
    }

    pub fn with_base_url(api_base_url: &str, catalog_limit: u32) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("pokedex-viewer/1.0")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            catalog_limit,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.api_base_url, self.catalog_limit)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, PokedexError> {
        let url = self.catalog_url();
        info!("Fetching catalog: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PokedexError::CatalogFetch(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(PokedexError::CatalogFetch(format!("API returned {}", status)));
        }

        let page: CatalogPage = response
            .json()
            .await
            .map_err(|e| PokedexError::CatalogFetch(format!("failed to parse catalog: {}", e)))?;

        info!("Fetched {} catalog entries", page.results.len());
        Ok(page.results)
    }

    async fn fetch_detail(&self, locator_or_name: &str) -> Result<ItemDetail, PokedexError> {
        let url = resolve_locator(&self.api_base_url, locator_or_name);
        debug!("Fetching detail: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PokedexError::DetailFetch(format!("request failed: {}", e)))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND | StatusCode::GONE => {
                warn!("No catalog item at {}", url);
                return Err(PokedexError::DetailNotFound(locator_or_name.trim().to_string()));
            }
            status => {
                return Err(PokedexError::DetailFetch(format!("API returned {}", status)));
            }
        }

        let detail: DetailResponse = response
            .json()
            .await
            .map_err(|e| PokedexError::DetailFetch(format!("failed to parse detail: {}", e)))?;

        let detail = detail.into_item_detail()?;
        info!("Fetched #{} {}", detail.id, detail.name);
        Ok(detail)
    }

    fn locator_for_id(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.api_base_url, id)
    }
}

// ============================================================================
// PokeAPI Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogPage {
    results: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: SpritesResponse,
    types: Vec<TypeSlotResponse>,
    stats: Vec<StatSlotResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct SpritesResponse {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlotResponse {
    #[serde(default)]
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatSlotResponse {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl DetailResponse {
    fn into_item_detail(self) -> Result<ItemDetail, PokedexError> {
        if self.id == 0 {
            return Err(PokedexError::DetailFetch("detail has id 0".into()));
        }
        if !(1..=2).contains(&self.types.len()) {
            return Err(PokedexError::DetailFetch(format!(
                "expected 1 or 2 types, got {}",
                self.types.len()
            )));
        }

        let mut types = self.types;
        types.sort_by_key(|t| t.slot);

        Ok(ItemDetail {
            id: self.id,
            name: self.name,
            sprite_reference: self.sprites.front_default,
            types: types.into_iter().map(|t| TypeName(t.kind.name)).collect(),
            stats: self
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base_value: s.base_stat,
                })
                .collect(),
        })
    }
}
