//! Small key-value store for display preferences.
//!
//! Values live in memory first. [`FileStore`] also persists them as a JSON
//! object; when the file cannot be read or written the value is still kept in
//! memory for the rest of the session.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value`. An error means it was kept in memory only.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl FileStore {
    /// Opens `path`, treating a missing file as empty.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self {
            path,
            memory: MemoryStore { values },
        })
    }

    fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.memory.values)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.memory.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.memory.set(key, value)?;
        self.persist()
    }
}

/// `$XDG_CONFIG_HOME/omari/preferences.json`, or under `~/.config`.
pub fn default_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("omari").join("preferences.json"))
}

/// File-backed store at `path`, or a memory store if that is not possible.
pub fn open(path: Option<PathBuf>) -> Box<dyn PreferenceStore> {
    let Some(path) = path else {
        tracing::warn!("no config directory, preferences will not persist");
        return Box::new(MemoryStore::new());
    };
    match FileStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "preferences unavailable, using memory");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn file_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        assert!(FileStore::open(&path).is_err());

        let mut store = open(Some(path));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn failed_write_keeps_value_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("omari");
        let mut store = FileStore::open(parent.join("preferences.json")).unwrap();
        // parent turns into a regular file, so create_dir_all fails
        fs::write(&parent, "").unwrap();

        assert!(store.set("theme", "light").is_err());
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }
}
