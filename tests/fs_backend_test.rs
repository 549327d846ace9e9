use chrono::NaiveDate;
use homeseek::favorites::{FavoritesStore, HydrationOutcome, Toggled};
use homeseek::model::{PropertyId, PropertyRecord};
use homeseek::store::fs_backend::FsBackend;
use homeseek::store::{StorageBackend, DEFAULT_FAVORITES_KEY};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

fn record(id: u32) -> PropertyRecord {
    PropertyRecord::new(
        id,
        "House",
        3,
        250_000 + id as u64,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    )
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Missing key
    assert_eq!(backend.read("k").unwrap(), None);

    // 2. Write creates the root and the file
    backend.write("k", "[]").unwrap();
    assert!(backend.root().join("k.json").exists());
    assert_eq!(backend.read("k").unwrap().as_deref(), Some("[]"));

    // 3. Erase, twice
    backend.erase("k").unwrap();
    backend.erase("k").unwrap();
    assert_eq!(backend.read("k").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.write("k", "one").unwrap();
    backend.write("k", "two").unwrap();

    assert_eq!(fs::read_to_string(backend.root().join("k.json")).unwrap(), "two");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    assert!(backend.write("../escape", "x").is_err());
    assert!(backend.read("a/b").is_err());
    assert!(backend.erase("").is_err());
}

#[test]
fn test_favorites_persist_across_processes() {
    let (dir, _) = setup();
    let root = dir.path().join("data");

    {
        let mut store = FavoritesStore::hydrate(FsBackend::new(root.clone()), DEFAULT_FAVORITES_KEY);
        assert_eq!(store.hydration(), HydrationOutcome::Missing);
        assert_eq!(store.toggle(&record(1)).unwrap(), Toggled::Added);
        assert_eq!(store.toggle(&record(2)).unwrap(), Toggled::Added);
    }

    let on_disk = fs::read_to_string(root.join("propertyFavorites.json")).unwrap();
    let parsed: Vec<PropertyRecord> = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed.len(), 2);

    let mut store = FavoritesStore::hydrate(FsBackend::new(root.clone()), DEFAULT_FAVORITES_KEY);
    assert_eq!(store.hydration(), HydrationOutcome::Loaded);
    assert!(store.is_favorite(PropertyId(1)));
    assert!(store.is_favorite(PropertyId(2)));

    store.clear_all().unwrap();
    assert!(!root.join("propertyFavorites.json").exists());
}

#[test]
fn test_corrupt_favorites_file_hydrates_empty() {
    let (dir, backend) = setup();
    backend.write(DEFAULT_FAVORITES_KEY, "this is not json").unwrap();

    let store = FavoritesStore::hydrate(&backend, DEFAULT_FAVORITES_KEY);
    assert!(store.is_empty());
    assert_eq!(store.hydration(), HydrationOutcome::Corrupt);

    // The corrupt value is left alone until the next mutation overwrites it
    assert!(dir.path().join("data").join("propertyFavorites.json").exists());
}
