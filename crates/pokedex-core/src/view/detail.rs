//! ============================================================================
//! Detail View Model - Selected item and its favorite state
//! ============================================================================

use tracing::debug;

use crate::favorites::FavoritesStore;
use crate::format::display_name;
use crate::types::ItemDetail;

/// What the detail panel shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing looked up yet
    #[default]
    Empty,
    Item {
        detail: ItemDetail,
        favorited: bool,
    },
    /// Last lookup failed or the item does not exist
    NotFound,
}

/// Identity handed to the favorites store when toggling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteTarget {
    pub id: u32,
    /// Display-formatted name, as stored in favorites
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct DetailViewModel {
    selected: Selection,
}

impl DetailViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selected
    }

    pub fn select(&mut self, detail: ItemDetail, favorites: &FavoritesStore) {
        let favorited = favorites.is_favorite(detail.id);
        debug!("Selected #{} {} (favorite: {})", detail.id, detail.name, favorited);
        self.selected = Selection::Item { detail, favorited };
    }

    pub fn select_not_found(&mut self) {
        self.selected = Selection::NotFound;
    }

    /// Re-derive the favorite flag from the store
    pub fn refresh_favorite(&mut self, favorites: &FavoritesStore) {
        if let Selection::Item { detail, favorited } = &mut self.selected {
            *favorited = favorites.is_favorite(detail.id);
        }
    }

    pub fn is_favorited(&self) -> bool {
        matches!(self.selected, Selection::Item { favorited: true, .. })
    }

    /// None when there is no favorite affordance (nothing selected, or not found)
    pub fn favorite_target(&self) -> Option<FavoriteTarget> {
        match &self.selected {
            Selection::Item { detail, .. } => Some(FavoriteTarget {
                id: detail.id,
                name: display_name(&detail.name),
            }),
            Selection::Empty | Selection::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::types::{Stat, TypeName};
    use std::sync::Arc;

    fn pikachu() -> ItemDetail {
        ItemDetail {
            id: 25,
            name: "pikachu".into(),
            sprite_reference: Some("https://img.test/25.png".into()),
            types: vec![TypeName("electric".into())],
            stats: vec![Stat { name: "hp".into(), base_value: 35 }],
        }
    }

    #[test]
    fn test_select_derives_favorite() {
        let store = FavoritesStore::new(Arc::new(MemoryStore::new()));
        let mut detail = DetailViewModel::new();
        assert_eq!(detail.selection(), &Selection::Empty);
        assert!(detail.favorite_target().is_none());

        detail.select(pikachu(), &store);
        assert!(!detail.is_favorited());
        assert_eq!(
            detail.favorite_target(),
            Some(FavoriteTarget { id: 25, name: "Pikachu".into() })
        );

        store.toggle_favorite(25, "Pikachu", "u25").unwrap();
        assert!(!detail.is_favorited());
        detail.refresh_favorite(&store);
        assert!(detail.is_favorited());

        detail.select(pikachu(), &store);
        assert!(detail.is_favorited());
    }

    #[test]
    fn test_not_found_has_no_affordance() {
        let store = FavoritesStore::new(Arc::new(MemoryStore::new()));
        let mut detail = DetailViewModel::new();
        detail.select(pikachu(), &store);
        detail.select_not_found();

        assert_eq!(detail.selection(), &Selection::NotFound);
        assert!(detail.favorite_target().is_none());
        assert!(!detail.is_favorited());

        detail.refresh_favorite(&store);
        assert_eq!(detail.selection(), &Selection::NotFound);
    }
}
