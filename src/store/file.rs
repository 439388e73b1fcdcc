//! JSON file store.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{PreferenceStore, StoreError};

const APP_DIR: &str = "themepref";
const STATE_FILE: &str = "state.json";

/// A [`PreferenceStore`] persisted as a flat JSON object on disk.
///
/// The file is read on every `get` and replaced on every `set`. Writes go to
/// a temporary file in the same directory which is then renamed over the
/// target, so a reader never observes a partially written file. Concurrent
/// writers to different keys can still lose each other's update. A missing
/// file reads as empty. A file that is not a JSON object of strings also
/// reads as empty and is replaced by the next write.
///
/// # Example
///
/// ```rust,no_run
/// use themepref::{FileStore, PreferenceStore};
///
/// let mut store = FileStore::default_location().expect("no config dir");
/// store.set("theme", "dark").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/themepref/state.json`, or `None` when the platform has no
    /// config directory.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join(STATE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable preference file");
                Ok(BTreeMap::new())
            }
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
                parent
            }
            _ => Path::new("."),
        };

        let encoded = serde_json::to_string_pretty(&entries)?;
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        staged
            .write_all(encoded.as_bytes())
            .map_err(|e| StoreError::io(dir, e))?;
        staged
            .persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("state.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut store = FileStore::new(&path);
        store.set("theme", "dark").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("state.json"));
        store.set("other", "value").unwrap();
        store.set("theme", "light").unwrap();

        assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_corrupt_file_reads_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "system").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("system"));
    }

    #[test]
    fn test_file_store_set_leaves_no_staging_files() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("state.json"));
        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("state.json")]);
    }

    #[test]
    fn test_file_store_reader_never_sees_partial_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let mut writer = FileStore::new(&path);
        writer.set("theme", "dark").unwrap();
        let reader = FileStore::new(&path);

        let handle = std::thread::spawn(move || {
            for i in 0..200 {
                let value = if i % 2 == 0 { "light" } else { "dark" };
                writer.set("theme", value).unwrap();
            }
        });

        while !handle.is_finished() {
            let value = reader.get("theme").unwrap();
            assert!(
                matches!(value.as_deref(), Some("light") | Some("dark")),
                "read {value:?}"
            );
        }
        handle.join().unwrap();
    }

    #[test]
    fn test_file_store_unreadable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be.
        let store = FileStore::new(dir.path());
        assert!(matches!(store.get("theme"), Err(StoreError::Io { .. })));
    }
}
