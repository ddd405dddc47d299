//! View models consumed by the presentation layer.

mod detail;
mod list;

pub use detail::{DetailViewModel, FavoriteTarget, Selection};
pub use list::{ListPresentation, ListViewModel};
