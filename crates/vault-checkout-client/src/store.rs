//! Local customer id storage.
//!
//! The original page kept a single key in `localStorage`; these stores
//! play that role. One key, one value, cleared wholesale.

use std::io;
use std::path::{Path, PathBuf};

/// Storage for the last-known vaulted customer id.
pub trait CustomerIdStore {
    /// Load the stored customer id, if any.
    fn load(&self) -> io::Result<Option<String>>;

    /// Persist a customer id, replacing any previous value.
    fn save(&mut self, customer_id: &str) -> io::Result<()>;

    /// Remove the stored customer id.
    fn clear(&mut self) -> io::Result<()>;
}

/// In-memory store, for tests and short-lived sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    customer_id: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerIdStore for MemoryStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.customer_id.clone())
    }

    fn save(&mut self, customer_id: &str) -> io::Result<()> {
        self.customer_id = Some(customer_id.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.customer_id = None;
        Ok(())
    }
}

/// File-backed store holding the customer id in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is created on the first [`CustomerIdStore::save`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CustomerIdStore for FileStore {
    fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let customer_id = contents.trim();
                Ok((!customer_id.is_empty()).then(|| customer_id.to_string()))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn save(&mut self, customer_id: &str) -> io::Result<()> {
        std::fs::write(&self.path, customer_id)
    }

    fn clear(&mut self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}
