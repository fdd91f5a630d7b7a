//! Application context handed to the store handle.
//!
//! # Responsibility
//! - Carry the configuration the core needs to locate its backing file.
//!
//! # Invariants
//! - The core never reads environment variables; callers build this value.

use crate::db::DATABASE_NAME;
use std::path::{Path, PathBuf};

/// Explicit configuration for opening the inventory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    data_dir: PathBuf,
}

impl AppContext {
    /// Creates a context rooted at `data_dir`.
    ///
    /// The directory must exist before the store is first opened.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Backing database file: `<data_dir>/item_database`.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_NAME)
    }
}
