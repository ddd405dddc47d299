//! ============================================================================
//! Favorites Store - Persisted favorite records
//! ============================================================================
//! The persisted JSON array is the single source of truth: every query reads
//! it, every mutation rewrites it whole. Concurrent writers race with last
//! write wins.
//! ============================================================================

use anyhow::{anyhow, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::db::KeyValueStore;
use crate::types::FavoriteRecord;

/// Storage key holding the favorites array
pub const STORAGE_KEY: &str = "pokedexFavorites";

/// Name shown when nothing is selected; never accepted as a favorite
pub const NO_SELECTION_NAME: &str = "Pokedex";

/// Favorites persisted in a key-value slot
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Persisted favorites in insertion order.
    /// Missing, malformed or unreadable data reads as empty.
    pub fn list_favorites(&self) -> Vec<FavoriteRecord> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<FavoriteRecord>>>(&raw) {
            Ok(records) => {
                let records = records.unwrap_or_default();
                debug!("Read {} favorites", records.len());
                records
            }
            Err(e) => {
                warn!("Ignoring malformed favorites data: {}", e);
                Vec::new()
            }
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.list_favorites().iter().any(|fav| fav.id == id)
    }

    /// Add the record if absent, remove it if present. Returns the new state.
    /// Invalid input (id 0, blank name, the placeholder name) is a no-op
    /// returning `false`.
    pub fn toggle_favorite(&self, id: u32, name: &str, detail_reference: &str) -> Result<bool> {
        if id == 0 || name.trim().is_empty() || name == NO_SELECTION_NAME {
            debug!("Ignoring favorite toggle for id={} name={:?}", id, name);
            return Ok(false);
        }

        let mut favorites = self.list_favorites();
        let now_favorite = match favorites.iter().position(|fav| fav.id == id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(FavoriteRecord {
                    id,
                    name: name.to_string(),
                    detail_reference: detail_reference.to_string(),
                });
                true
            }
        };

        self.save(&favorites)?;
        info!(
            "{} favorite #{} {} ({} stored)",
            if now_favorite { "Added" } else { "Removed" },
            id,
            name,
            favorites.len()
        );
        Ok(now_favorite)
    }

    /// Drop every favorite. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let count = self.list_favorites().len();
        self.store.remove(&self.key)?;
        info!("Cleared {} favorites", count);
        Ok(count)
    }

    fn save(&self, favorites: &[FavoriteRecord]) -> Result<()> {
        let json = serde_json::to_string(favorites)
            .map_err(|e| anyhow!("Failed to serialize favorites: {}", e))?;
        self.store.set(&self.key, &json)
    }
}
