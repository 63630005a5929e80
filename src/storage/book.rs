//! Book repository for JSON storage
//!
//! Persists the ledger (in order) and the pending queue to `book.json`. The
//! budget and undo history are not stored; they are rebuilt by replaying the
//! ledger through [`crate::services::BookService::bulk_load`].
//!
//! Saves go through `book.json.tmp` in the same directory and are renamed
//! into place after an fsync, so a crash mid-save keeps the previous book.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::book::Book;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Transaction;

const SCHEMA_VERSION: u32 = 1;

/// On-disk layout of `book.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Ledger contents in insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Scheduled bills in processing order
    #[serde(default)]
    pub scheduled: Vec<Transaction>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for BookSnapshot {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            transactions: Vec::new(),
            scheduled: Vec::new(),
        }
    }
}

impl BookSnapshot {
    /// Capture the persistent parts of a book
    pub fn of(book: &Book) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            transactions: book.ledger.snapshot().to_vec(),
            scheduled: book.pending.iter().cloned().collect(),
        }
    }
}

/// Repository for the book file
pub struct BookRepository {
    path: PathBuf,
}

impl BookRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored snapshot; an absent file is an empty book
    ///
    /// A file written by a newer schema is refused rather than partially read.
    pub fn load(&self) -> PocketbookResult<BookSnapshot> {
        if !self.path.exists() {
            return Ok(BookSnapshot::default());
        }

        let file = File::open(&self.path)
            .map_err(|e| self.storage_error("Failed to open book file", e))?;
        let snapshot: BookSnapshot = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| self.storage_error("Book file is corrupt", e))?;

        if snapshot.schema_version > SCHEMA_VERSION {
            return Err(PocketbookError::Storage(format!(
                "Book file {} has schema version {}, newer than supported version {}",
                self.path.display(),
                snapshot.schema_version,
                SCHEMA_VERSION
            )));
        }

        debug!(
            path = %self.path.display(),
            transactions = snapshot.transactions.len(),
            scheduled = snapshot.scheduled.len(),
            "loaded book"
        );
        Ok(snapshot)
    }

    pub fn save(&self, book: &Book) -> PocketbookResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| self.storage_error("Failed to create directory for book file", e))?;
        }

        let temp_path = self.temp_path();
        let result = self.write_snapshot(&temp_path, &BookSnapshot::of(book));
        let result = result.and_then(|()| {
            fs::rename(&temp_path, &self.path)
                .map_err(|e| self.storage_error("Failed to replace book file", e))
        });
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result?;

        debug!(path = %self.path.display(), "saved book");
        Ok(())
    }

    fn write_snapshot(&self, temp_path: &Path, snapshot: &BookSnapshot) -> PocketbookResult<()> {
        let file = File::create(temp_path)
            .map_err(|e| self.storage_error("Failed to create temp book file", e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot)
            .map_err(|e| self.storage_error("Failed to serialize book", e))?;
        writer
            .flush()
            .map_err(|e| self.storage_error("Failed to write book file", e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| self.storage_error("Failed to sync book file", e))
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn storage_error(&self, what: &str, err: impl std::fmt::Display) -> PocketbookError {
        PocketbookError::Storage(format!("{} {}: {}", what, self.path.display(), err))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
