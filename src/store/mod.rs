//! Persistent key/value storage for the preference.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: The storage interface the manager writes through
//! - [`MemoryStore`]: In-process map, the equivalent of a browser's local storage
//! - [`FileStore`]: JSON file on disk, for native hosts
//! - [`StoreError`]: Errors from store reads and writes

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A synchronous string key/value store.
///
/// Values are opaque strings; interpreting them is the caller's job.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
