//! Persistence port and its local-file implementation.
//!
//! The store serializes the whole entry collection to one string blob and
//! hands it to an adapter. The default adapter writes `classes.json` under
//! the data directory; tests use the in-memory adapter.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::error::PersistenceError;

/// Best-effort local string store the schedule is persisted through.
///
/// `load` returns `None` when nothing has been saved yet; that is not an
/// error. `save` replaces the previous blob wholesale.
pub trait PersistenceAdapter {
    fn load(&self) -> Result<Option<String>, PersistenceError>;
    fn save(&self, blob: &str) -> Result<(), PersistenceError>;
}

impl<T: PersistenceAdapter + ?Sized> PersistenceAdapter for std::rc::Rc<T> {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<(), PersistenceError> {
        (**self).save(blob)
    }
}

/// File-backed adapter writing a single JSON blob.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Adapter over `classes.json` in the application data directory.
    pub fn open() -> Result<Self, PersistenceError> {
        let dir = super::data_dir().map_err(|e| PersistenceError::StoreFailed(e.to_string()))?;
        Ok(Self {
            path: dir.join("classes.json"),
        })
    }

    /// Adapter over an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PersistenceAdapter for FileStore {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::LoadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }

    fn save(&self, blob: &str) -> Result<(), PersistenceError> {
        std::fs::write(&self.path, blob).map_err(|e| PersistenceError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// In-memory adapter for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with a blob, as if a previous session had saved it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
            fail_saves: false,
        }
    }

    /// Adapter whose saves always fail, for error-path tests.
    pub fn failing() -> Self {
        Self {
            blob: RefCell::new(None),
            fail_saves: true,
        }
    }

    /// Last saved blob, if any.
    pub fn saved(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl PersistenceAdapter for MemoryStore {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::StoreFailed("save disabled".into()));
        }
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_load_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at_path(dir.path().join("classes.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at_path(dir.path().join("classes.json"));
        store.save("[]").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_store_failing_saves() {
        let store = MemoryStore::failing();
        assert!(store.save("[]").is_err());
        assert!(store.load().unwrap().is_none());
    }
}
