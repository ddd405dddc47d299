//! ============================================================================
//! Types - Shared data structures for the catalog viewer
//! ============================================================================

use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Types
// ============================================================================

/// One row of the catalog list.
/// `detail_reference` is an opaque locator (the API's `url` field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(rename = "url")]
    pub detail_reference: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, detail_reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail_reference: detail_reference.into(),
        }
    }
}

/// Elemental type name, e.g. "electric"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(pub String);

impl TypeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single base stat, in API order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base_value: u32,
}

/// Full detail for one catalog item.
/// Replaced wholesale by the next successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    /// National dex number, always >= 1
    pub id: u32,
    /// Raw lowercase API name
    pub name: String,
    /// Front sprite URL; some forms have none
    pub sprite_reference: Option<String>,
    /// One or two types in slot order
    pub types: Vec<TypeName>,
    pub stats: Vec<Stat>,
}

// ============================================================================
// Favorites
// ============================================================================

/// Favorite record as persisted: `{ "id": 25, "name": "Pikachu", "url": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "url")]
    pub detail_reference: String,
}

impl From<&FavoriteRecord> for CatalogEntry {
    fn from(record: &FavoriteRecord) -> Self {
        CatalogEntry::new(record.name.clone(), record.detail_reference.clone())
    }
}

// ============================================================================
// View State
// ============================================================================

/// Which sequence the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    FullCatalog,
    FavoritesOnly,
}

impl ViewMode {
    pub fn flipped(self) -> Self {
        match self {
            ViewMode::FullCatalog => ViewMode::FavoritesOnly,
            ViewMode::FavoritesOnly => ViewMode::FullCatalog,
        }
    }
}

/// Load state of the full catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

// ============================================================================
// Errors
// ============================================================================

/// Error types for the catalog viewer.
/// None of these are fatal: the session stays usable after any of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PokedexError {
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    #[error("Detail fetch failed: {0}")]
    DetailFetch(String),

    #[error("Not found: {0}")]
    DetailNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
