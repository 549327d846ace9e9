//! # Favorites Store
//!
//! Favorites are snapshots of property records, unique by `id`, kept in the
//! order they were added. The whole list is written to the storage backend as
//! a single JSON array after every mutation: there is no append log and no
//! deferred flush, so once a mutating call returns `Ok`, a fresh
//! [`FavoritesStore::hydrate`] on the same backend sees the new state.
//!
//! Identity is the record id alone. A stale snapshot with a matching id is
//! still "the same favorite".
//!
//! ## Failure behavior
//!
//! - Hydration never fails. A missing key means no favorites; an unreadable or
//!   undecodable value is logged and treated as empty.
//! - A failed write rolls the in-memory list back to what it was before the
//!   call, then returns the error, so memory and storage do not drift apart.

use crate::error::{HomeseekError, Result};
use crate::model::{PropertyId, PropertyRecord};
use crate::store::StorageBackend;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// What hydration found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// Nothing stored under the key.
    Missing,
    /// A well-formed list was loaded.
    Loaded,
    /// The stored value could not be read or decoded; started empty.
    Corrupt,
}

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

pub struct FavoritesStore<B: StorageBackend> {
    backend: B,
    key: String,
    records: Vec<PropertyRecord>,
    hydration: HydrationOutcome,
}

impl<B: StorageBackend> FavoritesStore<B> {
    /// Loads favorites from `backend` under `key`.
    pub fn hydrate(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let (records, hydration) = match backend.read(&key) {
            Ok(None) => (Vec::new(), HydrationOutcome::Missing),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<PropertyRecord>>(&raw) {
                Ok(records) => (dedupe(records), HydrationOutcome::Loaded),
                Err(e) => {
                    warn!(key = %key, error = %e, "stored favorites are malformed, starting empty");
                    (Vec::new(), HydrationOutcome::Corrupt)
                }
            },
            Err(e) => {
                warn!(key = %key, error = %e, "could not read stored favorites, starting empty");
                (Vec::new(), HydrationOutcome::Corrupt)
            }
        };
        debug!(key = %key, count = records.len(), ?hydration, "favorites hydrated");

        Self {
            backend,
            key,
            records,
            hydration,
        }
    }

    pub fn hydration(&self) -> HydrationOutcome {
        self.hydration
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> HashSet<PropertyId> {
        self.records.iter().map(|r| r.id).collect()
    }

    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: PropertyId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Removes the record if it is a favorite, otherwise appends it.
    pub fn toggle(&mut self, record: &PropertyRecord) -> Result<Toggled> {
        let previous = self.records.clone();
        let outcome = match self.position(record.id) {
            Some(idx) => {
                self.records.remove(idx);
                Toggled::Removed
            }
            None => {
                self.records.push(record.clone());
                Toggled::Added
            }
        };
        self.flush_or_restore(previous)?;
        info!(id = %record.id, ?outcome, "favorite toggled");
        Ok(outcome)
    }

    /// Appends the record unless it is already a favorite.
    /// Returns `false`, without touching storage, if it was already present.
    pub fn add(&mut self, record: &PropertyRecord) -> Result<bool> {
        if self.is_favorite(record.id) {
            return Ok(false);
        }
        let previous = self.records.clone();
        self.records.push(record.clone());
        self.flush_or_restore(previous)?;
        info!(id = %record.id, "favorite added");
        Ok(true)
    }

    /// Removes by id. Returns `false`, without touching storage, if absent.
    pub fn remove(&mut self, id: PropertyId) -> Result<bool> {
        let Some(idx) = self.position(id) else {
            return Ok(false);
        };
        let previous = self.records.clone();
        self.records.remove(idx);
        self.flush_or_restore(previous)?;
        info!(id = %id, "favorite removed");
        Ok(true)
    }

    /// Empties the list and erases the storage key.
    pub fn clear_all(&mut self) -> Result<()> {
        self.backend.erase(&self.key)?;
        self.records.clear();
        info!(key = %self.key, "favorites cleared");
        Ok(())
    }

    fn flush_or_restore(&mut self, previous: Vec<PropertyRecord>) -> Result<()> {
        if let Err(e) = self.flush() {
            self.records = previous;
            return Err(e);
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.records).map_err(HomeseekError::Serialization)?;
        self.backend.write(&self.key, &raw)?;
        debug!(key = %self.key, count = self.records.len(), "favorites flushed");
        Ok(())
    }
}

fn dedupe(records: Vec<PropertyRecord>) -> Vec<PropertyRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records.into_iter().filter(|r| seen.insert(r.id)).collect()
}
