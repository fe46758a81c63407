//! Key-value persistence substrate
//!
//! Stores opaque blobs under short string keys. Writes replace the whole
//! blob for a key.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use async_trait::async_trait;

use crate::{Error, Result};

/// Blob storage keyed by name
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove the blob stored under `key`, returning whether it existed
    async fn remove(&self, key: &str) -> Result<bool>;
}

/// Check that a key is usable as a file name on every backend
pub fn validate_key(key: &str) -> Result<()> {
    let valid_chars = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if key.is_empty() || key.starts_with('.') || !valid_chars {
        return Err(Error::InvalidInput(format!("Invalid storage key: {:?}", key)));
    }
    Ok(())
}
