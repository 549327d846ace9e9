//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every homeseek operation, whatever UI sits on top.
//!
//! It owns the two pieces of application state, the read-only [`Catalog`]
//! and the [`FavoritesStore`], and hands them to the command functions.
//! Business logic stays in `commands/*.rs`; presentation stays in the UI.
//! Configuration lives outside the facade (`commands::config`) because it is
//! usable before any catalog is loaded.
//!
//! ## Generic Over StorageBackend
//!
//! `PropertyApi<B: StorageBackend>` is generic over where favorites persist:
//! - Production: `PropertyApi<FsBackend>`
//! - Testing: `PropertyApi<MemBackend>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::filter::SearchForm;
use crate::store::StorageBackend;

pub struct PropertyApi<B: StorageBackend> {
    catalog: Catalog,
    favorites: FavoritesStore<B>,
}

impl<B: StorageBackend> PropertyApi<B> {
    /// Builds the API, hydrating favorites from `backend` under `favorites_key`.
    pub fn new(catalog: Catalog, backend: B, favorites_key: &str) -> Self {
        Self {
            catalog,
            favorites: FavoritesStore::hydrate(backend, favorites_key),
        }
    }

    pub fn search(&self, form: &SearchForm) -> commands::CmdResult {
        commands::search::run(&self.catalog, form)
    }

    pub fn view(&self, raw_id: &str) -> commands::CmdResult {
        commands::view::run(&self.catalog, &self.favorites, raw_id)
    }

    pub fn list_favorites(&self) -> commands::CmdResult {
        commands::favorites::list(&self.favorites)
    }

    pub fn toggle_favorite(&mut self, raw_id: &str) -> Result<commands::CmdResult> {
        commands::favorites::toggle(&self.catalog, &mut self.favorites, raw_id)
    }

    pub fn add_favorite(&mut self, raw_id: &str) -> Result<commands::CmdResult> {
        commands::favorites::add(&self.catalog, &mut self.favorites, raw_id)
    }

    pub fn remove_favorite(&mut self, raw_id: &str) -> Result<commands::CmdResult> {
        commands::favorites::remove(&mut self.favorites, raw_id)
    }

    pub fn clear_favorites(&mut self) -> Result<commands::CmdResult> {
        commands::favorites::clear(&mut self.favorites)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesStore<B> {
        &self.favorites
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, DetailOutcome, MessageLevel};
pub use crate::filter::{IgnoredCriterion, SearchFilters};
