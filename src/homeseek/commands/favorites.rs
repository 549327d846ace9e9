use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::{FavoritesStore, Toggled};
use crate::model::{parse_property_id, PropertyRecord};
use crate::store::StorageBackend;

fn resolve<'a>(catalog: &'a Catalog, raw_id: &str) -> Option<&'a PropertyRecord> {
    parse_property_id(raw_id).and_then(|id| catalog.find_by_id(id))
}

fn not_found(raw_id: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "Property not found: {}",
        raw_id
    )))
}

fn label(record: &PropertyRecord) -> String {
    if record.location.is_empty() {
        format!("#{} {}", record.id, record.property_type)
    } else {
        format!("#{} {}, {}", record.id, record.property_type, record.location)
    }
}

pub fn list<B: StorageBackend>(favorites: &FavoritesStore<B>) -> CmdResult {
    CmdResult::default().with_listed(favorites.records().to_vec())
}

pub fn toggle<B: StorageBackend>(
    catalog: &Catalog,
    favorites: &mut FavoritesStore<B>,
    raw_id: &str,
) -> Result<CmdResult> {
    let Some(record) = resolve(catalog, raw_id) else {
        return Ok(not_found(raw_id));
    };

    let message = match favorites.toggle(record)? {
        Toggled::Added => CmdMessage::success(format!("Added to favorites: {}", label(record))),
        Toggled::Removed => {
            CmdMessage::success(format!("Removed from favorites: {}", label(record)))
        }
    };
    Ok(CmdResult::default()
        .with_affected(vec![record.clone()])
        .with_message(message))
}

pub fn add<B: StorageBackend>(
    catalog: &Catalog,
    favorites: &mut FavoritesStore<B>,
    raw_id: &str,
) -> Result<CmdResult> {
    let Some(record) = resolve(catalog, raw_id) else {
        return Ok(not_found(raw_id));
    };

    if favorites.add(record)? {
        Ok(CmdResult::default()
            .with_affected(vec![record.clone()])
            .with_message(CmdMessage::success(format!(
                "Added to favorites: {}",
                label(record)
            ))))
    } else {
        Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Already a favorite: {}",
            label(record)
        ))))
    }
}

/// Removes by id without consulting the catalog, so favorites whose listing
/// has since disappeared can still be dropped.
pub fn remove<B: StorageBackend>(
    favorites: &mut FavoritesStore<B>,
    raw_id: &str,
) -> Result<CmdResult> {
    let Some(id) = parse_property_id(raw_id) else {
        return Ok(not_found(raw_id));
    };
    let Some(record) = favorites.records().iter().find(|r| r.id == id).cloned() else {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Not a favorite: {}",
            raw_id
        ))));
    };

    favorites.remove(id)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Removed from favorites: {}",
            label(&record)
        )))
        .with_affected(vec![record]))
}

pub fn clear<B: StorageBackend>(favorites: &mut FavoritesStore<B>) -> Result<CmdResult> {
    let removed = favorites.records().to_vec();
    favorites.clear_all()?;
    let message = if removed.is_empty() {
        CmdMessage::info("No favorites to clear")
    } else {
        CmdMessage::success(format!("Cleared {} favorites", removed.len()))
    };
    Ok(CmdResult::default()
        .with_affected(removed)
        .with_message(message))
}
