//! ============================================================================
//! List View Model - Full catalog or favorites subset
//! ============================================================================

use tracing::debug;

use crate::favorites::FavoritesStore;
use crate::types::{CatalogEntry, CatalogStatus, ViewMode};

/// What the list area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPresentation {
    /// Catalog request still in flight
    Loading,
    /// Catalog request failed; no retry until the user asks
    CatalogUnavailable(String),
    /// Favorites view with nothing stored
    NoFavorites,
    Entries(Vec<CatalogEntry>),
}

/// Holds the fetched catalog and the current view mode
#[derive(Debug, Clone, Default)]
pub struct ListViewModel {
    full_catalog: Vec<CatalogEntry>,
    mode: ViewMode,
    status: CatalogStatus,
}

impl ListViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog. The view mode is left alone.
    pub fn load_catalog(&mut self, entries: Vec<CatalogEntry>) {
        debug!("Loaded {} catalog entries", entries.len());
        self.full_catalog = entries;
        self.status = CatalogStatus::Loaded;
    }

    pub fn mark_loading(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.status = CatalogStatus::Failed(reason.into());
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn full_catalog(&self) -> &[CatalogEntry] {
        &self.full_catalog
    }

    /// Flip the mode and return the entries to render for the new mode
    pub fn toggle_mode(&mut self, favorites: &FavoritesStore) -> Vec<CatalogEntry> {
        self.mode = self.mode.flipped();
        debug!("List view mode is now {:?}", self.mode);
        self.current_view(favorites)
    }

    /// Entries for the current mode, re-read from the store when showing favorites
    pub fn current_view(&self, favorites: &FavoritesStore) -> Vec<CatalogEntry> {
        match self.mode {
            ViewMode::FullCatalog => self.full_catalog.clone(),
            ViewMode::FavoritesOnly => favorites
                .list_favorites()
                .iter()
                .map(CatalogEntry::from)
                .collect(),
        }
    }

    /// Current view with the empty, loading and failed states told apart
    pub fn presentation(&self, favorites: &FavoritesStore) -> ListPresentation {
        match self.mode {
            ViewMode::FullCatalog => match &self.status {
                CatalogStatus::Loading => ListPresentation::Loading,
                CatalogStatus::Failed(reason) => ListPresentation::CatalogUnavailable(reason.clone()),
                CatalogStatus::Loaded => ListPresentation::Entries(self.full_catalog.clone()),
            },
            ViewMode::FavoritesOnly => {
                let entries = self.current_view(favorites);
                if entries.is_empty() {
                    ListPresentation::NoFavorites
                } else {
                    ListPresentation::Entries(entries)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use std::sync::Arc;

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
            CatalogEntry::new("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
            CatalogEntry::new("venusaur", "https://pokeapi.co/api/v2/pokemon/3/"),
        ]
    }

    fn favorites() -> FavoritesStore {
        FavoritesStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_load_keeps_mode() {
        let store = favorites();
        let mut list = ListViewModel::new();
        list.toggle_mode(&store);
        list.load_catalog(catalog());
        assert_eq!(list.mode(), ViewMode::FavoritesOnly);
        assert_eq!(list.status(), &CatalogStatus::Loaded);
        assert_eq!(list.full_catalog().len(), 3);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let store = favorites();
        store.toggle_favorite(25, "Pikachu", "u25").unwrap();

        let mut list = ListViewModel::new();
        list.load_catalog(catalog());
        let before = list.current_view(&store);

        let favorites_view = list.toggle_mode(&store);
        assert_eq!(favorites_view, vec![CatalogEntry::new("Pikachu", "u25")]);

        let after = list.toggle_mode(&store);
        assert_eq!(after, before);
        assert_eq!(list.mode(), ViewMode::FullCatalog);
    }

    #[test]
    fn test_unfavorite_in_favorites_mode_updates_view() {
        let store = favorites();
        store.toggle_favorite(1, "A", "ua").unwrap();
        store.toggle_favorite(2, "B", "ub").unwrap();

        let mut list = ListViewModel::new();
        list.load_catalog(catalog());
        assert_eq!(list.toggle_mode(&store).len(), 2);

        store.toggle_favorite(1, "A", "ua").unwrap();
        assert_eq!(list.current_view(&store), vec![CatalogEntry::new("B", "ub")]);
        assert_eq!(list.full_catalog().len(), 3);
    }

    #[test]
    fn test_presentation_states() {
        let store = favorites();
        let mut list = ListViewModel::new();
        assert_eq!(list.presentation(&store), ListPresentation::Loading);

        list.mark_failed("API returned 500");
        assert_eq!(
            list.presentation(&store),
            ListPresentation::CatalogUnavailable("API returned 500".into())
        );

        list.toggle_mode(&store);
        assert_eq!(list.presentation(&store), ListPresentation::NoFavorites);
        assert!(list.current_view(&store).is_empty());

        list.toggle_mode(&store);
        list.load_catalog(catalog());
        assert_eq!(list.presentation(&store), ListPresentation::Entries(catalog()));
    }
}
