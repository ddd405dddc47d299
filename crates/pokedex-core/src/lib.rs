//! ============================================================================
//! POKEDEX-CORE: Catalog viewer state
//! ============================================================================
//! This crate handles everything behind the presentation layer:
//! - Remote catalog client for the PokeAPI (reqwest)
//! - Favorites persisted as one JSON blob in an embedded redb database
//! - List and detail view models
//! - Session wiring with lookup sequencing and pacing
//! ============================================================================

pub mod catalog;
pub mod config;
pub mod db;
pub mod favorites;
pub mod format;
pub mod session;
pub mod types;
pub mod view;

// Re-export main types for convenience
pub use types::*;
pub use catalog::{resolve_locator, CatalogApi, CatalogClient};
pub use config::PokedexConfig;
pub use db::{KeyValueStore, MemoryStore, PokedexDb};
pub use favorites::{FavoritesStore, NO_SELECTION_NAME, STORAGE_KEY};
pub use session::{LookupOutcome, LookupStatus, PendingLookup, Session};
pub use view::{DetailViewModel, FavoriteTarget, ListPresentation, ListViewModel, Selection};
