//! # Storage Layer
//!
//! Persistent state in homeseek is a handful of string values addressed by
//! key, the favorites snapshot being the only one the core writes. The
//! [`StorageBackend`] trait is that key-value slot; callers hand a backend to
//! whatever needs persistence instead of reaching for a global.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one file per key
//!   (`<root>/<key>.json`), written atomically via tmp-file + rename.
//! - [`mem_backend::MemBackend`]: in-memory storage for tests, with optional
//!   write-failure simulation.
//!
//! Values are opaque strings at this layer. Encoding and decoding (and the
//! decision of what to do with a value that fails to decode) belong to the
//! caller.

use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;

/// Storage key holding the serialized favorites list.
pub const DEFAULT_FAVORITES_KEY: &str = "propertyFavorites";

/// Abstract key-value storage.
///
/// Methods take `&self`; homeseek is single-threaded, so backends that need
/// mutation use interior mutability.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if the key has never been written or was erased.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the whole value under `key`.
    /// The write must be visible to the next `read` once this returns.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Erasing a missing key is not an error.
    fn erase(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn erase(&self, key: &str) -> Result<()> {
        (**self).erase(key)
    }
}
