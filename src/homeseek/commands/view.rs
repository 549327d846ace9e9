use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::favorites::FavoritesStore;
use crate::model::{parse_property_id, PropertyRecord};
use crate::store::StorageBackend;

/// Outcome of a detail lookup. "Not found" is a normal outcome that the UI
/// renders as its own state.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found {
        record: PropertyRecord,
        is_favorite: bool,
    },
    NotFound {
        raw_id: String,
    },
}

pub fn run<B: StorageBackend>(
    catalog: &Catalog,
    favorites: &FavoritesStore<B>,
    raw_id: &str,
) -> CmdResult {
    let found = parse_property_id(raw_id).and_then(|id| catalog.find_by_id(id));

    match found {
        Some(record) => CmdResult::default().with_detail(DetailOutcome::Found {
            record: record.clone(),
            is_favorite: favorites.is_favorite(record.id),
        }),
        None => CmdResult::default()
            .with_detail(DetailOutcome::NotFound {
                raw_id: raw_id.to_string(),
            })
            .with_message(CmdMessage::warning(format!(
                "Property not found: {}",
                raw_id
            ))),
    }
}
