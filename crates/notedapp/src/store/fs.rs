use super::SnapshotStore;
use crate::error::{NotedError, Result};
use crate::model::Snapshot;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed snapshot store: one pretty-printed JSON blob.
///
/// A missing file loads as the default snapshot; the parent directory is
/// created on first save.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            log::debug!("no snapshot at {}, starting fresh", self.path.display());
            return Ok(Snapshot::default());
        }
        let content = fs::read_to_string(&self.path).map_err(NotedError::Io)?;
        let snapshot = serde_json::from_str(&content).map_err(NotedError::Serialization)?;
        Ok(snapshot)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(NotedError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(snapshot).map_err(NotedError::Serialization)?;
        fs::write(&self.path, content).map_err(NotedError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Tag, TagColor, DEFAULT_FOLDER_ID};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("store.json"));
        let snap = store.load().unwrap();
        assert!(snap.is_fresh());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deep").join("nested").join("store.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&Snapshot::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp.path().join("store.json"));

        let mut snap = Snapshot::default();
        let mut note = Note::new(DEFAULT_FOLDER_ID.to_string());
        note.title = "Persisted".to_string();
        note.content = "# Body".to_string();
        snap.notes.push(note);
        snap.tags.push(Tag::new("work".to_string(), TagColor::Teal));
        snap.search_query = "body".to_string();

        store.save(&snap).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, snap);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(NotedError::Serialization(_))
        ));
    }
}
