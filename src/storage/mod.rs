//! Storage layer for Pocketbook
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod book;

pub use book::{BookRepository, BookSnapshot};

use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;

/// Storage coordinator giving access to the repositories
pub struct Storage {
    paths: PocketbookPaths,
    pub book: BookRepository,
}

impl Storage {
    /// Create a Storage instance, creating directories as needed
    pub fn new(paths: PocketbookPaths) -> Result<Self, PocketbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            book: BookRepository::new(paths.book_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &PocketbookPaths {
        &self.paths
    }

    /// Check if storage has been initialized (settings file written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
