#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"id": 1, "type": "House", "bedrooms": 3, "price": 500000, "postcode": "SW1A 1AA",
     "location": "Westminster", "added": "2024-01-01"},
    {"id": 2, "type": "Flat", "bedrooms": 1, "price": 300000, "postcode": "NW1 6XE",
     "location": "Camden", "added": {"month": "June", "day": 1, "year": 2024}}
]"#;

fn setup() -> TempDir {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("properties.json"), CATALOG).unwrap();
    data
}

fn homeseek_cmd(data: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("homeseek"));
    cmd.env("HOMESEEK_DATA", data.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("HOMESEEK_LOG");
    cmd
}

#[test]
fn test_search_by_type() {
    let data = setup();
    homeseek_cmd(data.path())
        .args(["search", "--type", "Flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#2"))
        .stdout(predicate::str::contains("Camden"))
        .stdout(predicate::str::contains("Westminster").not())
        .stdout(predicate::str::contains("1 property found"));
}

#[test]
fn test_search_without_hits_says_so() {
    let data = setup();
    homeseek_cmd(data.path())
        .args(["search", "--min-price", "900000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No properties found."))
        .stdout(predicate::str::contains("0 properties found"));
}

#[test]
fn test_no_subcommand_lists_catalog() {
    let data = setup();
    homeseek_cmd(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 properties found"));
}

#[test]
fn test_malformed_criterion_is_ignored() {
    let data = setup();
    homeseek_cmd(data.path())
        .args(["search", "--min-price", "abc", "--postcode", "sw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignored min price"))
        .stdout(predicate::str::contains("1 property found"));
}

#[test]
fn test_view_found_and_not_found() {
    let data = setup();
    homeseek_cmd(data.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("House · £500,000"))
        .stdout(predicate::str::contains("1 January 2024"));

    homeseek_cmd(data.path())
        .args(["view", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No property with id 99"));
}

#[test]
fn test_favorites_workflow() {
    let data = setup();
    let fav_file = data.path().join("propertyFavorites.json");

    // 1. Toggle on
    homeseek_cmd(data.path())
        .args(["fav", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites: #1 House"));
    assert!(fav_file.exists());

    // 2. Shows up in a fresh process
    homeseek_cmd(data.path())
        .args(["fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("★ #1"));

    // 3. Unknown id does not touch the list
    homeseek_cmd(data.path())
        .args(["fav", "add", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Property not found: 42"));

    // 4. Clear erases the stored key
    homeseek_cmd(data.path())
        .args(["fav", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 favorites"));
    assert!(!fav_file.exists());

    homeseek_cmd(data.path())
        .args(["fav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn test_corrupt_favorites_do_not_fail() {
    let data = setup();
    fs::write(data.path().join("propertyFavorites.json"), "{oops").unwrap();

    homeseek_cmd(data.path())
        .args(["fav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn test_missing_catalog_is_an_error() {
    let data = TempDir::new().unwrap();
    homeseek_cmd(data.path())
        .args(["search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog not found"));
}

#[test]
fn test_config_round_trip_without_catalog() {
    let data = TempDir::new().unwrap();
    homeseek_cmd(data.path())
        .args(["config", "list-width", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list-width set to 80"));

    homeseek_cmd(data.path())
        .args(["config", "list-width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("80"));
}

#[test]
fn test_types_lists_distinct_types() {
    let data = setup();
    homeseek_cmd(data.path())
        .args(["types"])
        .assert()
        .success()
        .stdout(predicate::eq("House\nFlat\n"));
}
