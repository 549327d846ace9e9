//! # Homeseek Architecture
//!
//! Homeseek is a **UI-agnostic property search library**: a static catalog of
//! listings, a filter engine over it, detail lookup, and a favorites list that
//! persists in a key-value store. The bundled CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Catalog and the FavoritesStore                  │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - search, view, favorites, config                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog.rs, filter.rs, favorites.rs, model.rs)       │
//! │  Storage (store/): StorageBackend, FsBackend, MemBackend    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contracts
//!
//! - Searching never fails. Missing criteria are not applied; malformed
//!   criteria are dropped and reported, never raised.
//! - Looking up an id that does not exist is an ordinary "not found" outcome.
//! - Every favorites mutation is written to storage before it returns.
//! - A corrupt favorites value loads as an empty list.
//!
//! Only catalog loading, storage I/O and config I/O return errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per command
//! - [`catalog`]: Read-only catalog and id lookup
//! - [`filter`]: Search criteria and the filter engine
//! - [`favorites`]: The persisted favorites set
//! - [`store`]: Storage abstraction and backends
//! - [`model`]: `PropertyRecord`, `PropertyId`, date parsing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod model;
pub mod store;
