//! ============================================================================
//! Session - Wires the client, favorites and view models together
//! ============================================================================
//! Control flow:
//!   load_catalog -> list view model
//!   lookup       -> client -> pacing delay -> detail view model
//!   toggle_favorite mutates the store; the favorites view re-derives from it
//!
//! Lookups are numbered. A result is applied only if no newer lookup has been
//! started, so a slow early lookup cannot overwrite a fast later one.
//! ============================================================================

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::catalog::CatalogApi;
use crate::favorites::FavoritesStore;
use crate::types::{CatalogEntry, ItemDetail, PokedexError};
use crate::view::{DetailViewModel, ListPresentation, ListViewModel};

/// A lookup that has been numbered but not yet fetched
#[derive(Debug, Clone)]
pub struct PendingLookup {
    seq: u64,
    input: String,
}

impl PendingLookup {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Fetch the detail, then wait out the pacing delay whatever the result.
    /// Does not touch the session, so several lookups can be in flight at once.
    pub async fn resolve(self, api: &dyn CatalogApi, pacing: Duration) -> LookupOutcome {
        let result = api.fetch_detail(&self.input).await;
        if !pacing.is_zero() {
            tokio::time::sleep(pacing).await;
        }
        LookupOutcome {
            seq: self.seq,
            input: self.input,
            result,
        }
    }
}

/// Finished lookup waiting to be applied
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub seq: u64,
    pub input: String,
    pub result: Result<ItemDetail, PokedexError>,
}

/// What applying a lookup did to the detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Shown,
    NotFound,
    /// A newer lookup was started; result discarded
    Stale,
}

/// Explicit session state; no globals
pub struct Session {
    api: Arc<dyn CatalogApi>,
    favorites: FavoritesStore,
    list: ListViewModel,
    detail: DetailViewModel,
    pacing: Duration,
    latest_lookup: u64,
}

impl Session {
    pub fn new(api: Arc<dyn CatalogApi>, favorites: FavoritesStore, pacing: Duration) -> Self {
        Self {
            api,
            favorites,
            list: ListViewModel::new(),
            detail: DetailViewModel::new(),
            pacing,
            latest_lookup: 0,
        }
    }

    pub fn api(&self) -> Arc<dyn CatalogApi> {
        Arc::clone(&self.api)
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn list(&self) -> &ListViewModel {
        &self.list
    }

    pub fn detail(&self) -> &DetailViewModel {
        &self.detail
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Fetch the catalog into the list view model. On failure the list shows
    /// the unavailable state and the error is returned; nothing is retried.
    pub async fn load_catalog(&mut self) -> Result<usize, PokedexError> {
        self.list.mark_loading();
        match self.api.fetch_catalog().await {
            Ok(entries) => {
                let count = entries.len();
                self.list.load_catalog(entries);
                Ok(count)
            }
            Err(e) => {
                warn!("Catalog unavailable: {}", e);
                self.list.mark_failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn toggle_view(&mut self) -> Vec<CatalogEntry> {
        self.list.toggle_mode(&self.favorites)
    }

    pub fn current_view(&self) -> Vec<CatalogEntry> {
        self.list.current_view(&self.favorites)
    }

    pub fn presentation(&self) -> ListPresentation {
        self.list.presentation(&self.favorites)
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Number a new lookup. Any lookup started earlier becomes stale.
    pub fn begin_lookup(&mut self, input: &str) -> PendingLookup {
        self.latest_lookup += 1;
        debug!("Lookup #{} for {:?}", self.latest_lookup, input);
        PendingLookup {
            seq: self.latest_lookup,
            input: input.to_string(),
        }
    }

    /// Apply a finished lookup unless a newer one has been started
    pub fn apply_lookup(&mut self, outcome: LookupOutcome) -> LookupStatus {
        if outcome.seq != self.latest_lookup {
            debug!(
                "Discarding lookup #{} for {:?}, latest is #{}",
                outcome.seq, outcome.input, self.latest_lookup
            );
            return LookupStatus::Stale;
        }

        match outcome.result {
            Ok(detail) => {
                self.detail.select(detail, &self.favorites);
                LookupStatus::Shown
            }
            Err(e) => {
                warn!("Lookup for {:?} failed: {}", outcome.input, e);
                self.detail.select_not_found();
                LookupStatus::NotFound
            }
        }
    }

    /// Start, resolve and apply one lookup
    pub async fn lookup(&mut self, input: &str) -> LookupStatus {
        let pending = self.begin_lookup(input);
        let api = self.api();
        let outcome = pending.resolve(api.as_ref(), self.pacing).await;
        self.apply_lookup(outcome)
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    /// Toggle the selected item's favorite. No-op returning false when nothing
    /// valid is selected.
    pub fn toggle_favorite(&mut self) -> Result<bool> {
        let target = match self.detail.favorite_target() {
            Some(target) => target,
            None => {
                debug!("No selection to favorite");
                return Ok(false);
            }
        };

        let reference = self.api.locator_for_id(target.id);
        let favorited = self
            .favorites
            .toggle_favorite(target.id, &target.name, &reference)?;
        self.detail.refresh_favorite(&self.favorites);
        info!("#{} {} favorite: {}", target.id, target.name, favorited);
        Ok(favorited)
    }
}
