//! # Catalog Store
//!
//! The catalog is the full, read-only list of property records. It is loaded
//! once at startup and never mutated afterwards: every accessor hands out
//! shared references, and there is no API to insert or replace a record.
//!
//! Listing data is accepted either as a bare JSON array of records or wrapped
//! in an object under a `properties` key.

use crate::error::{HomeseekError, Result};
use crate::model::{PropertyId, PropertyRecord};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
struct CatalogFile {
    properties: Vec<PropertyRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<PropertyRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_records(records: Vec<PropertyRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(HomeseekError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// Decodes the shape picked by the first token, so a bad record surfaces
    /// serde_json's own error with its line and column.
    pub fn from_json(json: &str) -> Result<Self> {
        let records = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<PropertyRecord>>(json)?
        } else {
            serde_json::from_str::<CatalogFile>(json)?.properties
        };
        Self::from_records(records)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(HomeseekError::Io)?;
        let catalog = Self::from_json(&content)?;
        debug!(path = %path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by id. A miss is an ordinary outcome, not an error.
    pub fn find_by_id(&self, id: PropertyId) -> Option<&PropertyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Distinct property types in first-seen order.
    pub fn property_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for record in self.iter() {
            if !types.contains(&record.property_type.as_str()) {
                types.push(&record.property_type);
            }
        }
        types
    }
}
