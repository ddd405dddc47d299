//! Text rendering for list and detail views.

use pokedex_core::format::{display_name, dex_number};
use pokedex_core::{ListPresentation, Selection, NO_SELECTION_NAME};
use std::fmt::Write;

pub const LOADING: &str = "Loading Pokémon...";
pub const UNAVAILABLE: &str = "Error loading the list.";
pub const NO_FAVORITES: &str = "You have no favorite Pokémon saved.";
pub const NOT_FOUND: &str = "Not found";

pub fn list(presentation: &ListPresentation) -> String {
    match presentation {
        ListPresentation::Loading => format!("{}\n", LOADING),
        ListPresentation::CatalogUnavailable(_) => format!("{}\n", UNAVAILABLE),
        ListPresentation::NoFavorites => format!("{}\n", NO_FAVORITES),
        ListPresentation::Entries(entries) => {
            let mut out = String::new();
            for (index, entry) in entries.iter().enumerate() {
                let _ = writeln!(out, "{:>4}. {}", index + 1, display_name(&entry.name));
            }
            out
        }
    }
}

pub fn detail(selection: &Selection) -> String {
    let mut out = String::new();
    match selection {
        Selection::Empty => {
            let _ = writeln!(out, "{}", NO_SELECTION_NAME);
        }
        Selection::NotFound => {
            let _ = writeln!(out, "{}", NOT_FOUND);
        }
        Selection::Item { detail, favorited } => {
            let _ = writeln!(out, "{}  {}", display_name(&detail.name), dex_number(detail.id));
            if let Some(sprite) = &detail.sprite_reference {
                let _ = writeln!(out, "  sprite: {}", sprite);
            }
            let types: Vec<&str> = detail.types.iter().map(|t| t.as_str()).collect();
            let _ = writeln!(out, "  types:  {}", types.join(" / "));
            for stat in &detail.stats {
                let _ = writeln!(out, "  {:<16} {:>3}", stat.name, stat.base_value);
            }
            let _ = writeln!(out, "  {}", if *favorited { "♥ Favorite" } else { "☆ Not a favorite" });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::{CatalogEntry, ItemDetail, Stat, TypeName};

    #[test]
    fn test_list_states_are_distinct() {
        let rendered = [
            list(&ListPresentation::Loading),
            list(&ListPresentation::CatalogUnavailable("timeout".into())),
            list(&ListPresentation::NoFavorites),
        ];
        assert_eq!(rendered[0], "Loading Pokémon...\n");
        assert_ne!(rendered[0], rendered[1]);
        assert_ne!(rendered[1], rendered[2]);
    }

    #[test]
    fn test_list_entries_are_capitalized() {
        let out = list(&ListPresentation::Entries(vec![
            CatalogEntry::new("bulbasaur", "u1"),
            CatalogEntry::new("ivysaur", "u2"),
        ]));
        assert_eq!(out, "   1. Bulbasaur\n   2. Ivysaur\n");
    }

    #[test]
    fn test_detail_card() {
        let selection = Selection::Item {
            detail: ItemDetail {
                id: 6,
                name: "charizard".into(),
                sprite_reference: None,
                types: vec![TypeName("fire".into()), TypeName("flying".into())],
                stats: vec![Stat { name: "hp".into(), base_value: 78 }],
            },
            favorited: true,
        };

        let out = detail(&selection);
        assert!(out.starts_with("Charizard  Nº 6\n"));
        assert!(out.contains("fire / flying"));
        assert!(out.contains("hp"));
        assert!(out.contains("♥ Favorite"));
        assert!(!out.contains("sprite"));

        assert_eq!(detail(&Selection::NotFound), "Not found\n");
    }
}
