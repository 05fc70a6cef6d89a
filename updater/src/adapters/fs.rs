//! Filesystem document store

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::DocumentStore;
use crate::error::AppError;

/// A UTF-8 text file on disk
pub struct FsDocumentStore {
    path: PathBuf,
}

impl FsDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> AppError {
        AppError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentStore for FsDocumentStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, AppError> {
        fs::read_to_string(&self.path).map_err(|e| self.io_error(e))
    }

    fn write(&self, content: &str) -> Result<(), AppError> {
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        tracing::info!(path = %self.path.display(), "README updated");
        Ok(())
    }
}
