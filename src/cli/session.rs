//! Per-invocation state shared by the command handlers
//!
//! Each command opens a session, loads the book (rebuilding the budget and
//! undo history from the stored ledger), runs one operation and saves if the
//! book changed.

use tracing::info;

use crate::audit::AuditLogger;
use crate::book::Book;
use crate::config::{PocketbookPaths, Settings};
use crate::error::PocketbookResult;
use crate::services::BookService;
use crate::storage::Storage;

pub struct Session {
    storage: Storage,
    settings: Settings,
    audit: AuditLogger,
}

impl Session {
    /// Open storage under `paths`, creating directories as needed
    pub fn open(paths: PocketbookPaths, settings: Settings) -> PocketbookResult<Self> {
        let audit = AuditLogger::new(paths.audit_log());
        let storage = Storage::new(paths)?;
        Ok(Self {
            storage,
            settings,
            audit,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn paths(&self) -> &PocketbookPaths {
        self.storage.paths()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Read the stored book and replay it into a fresh one
    ///
    /// Replay is not audited; only the mutations a command performs are.
    pub fn load_book(&self) -> PocketbookResult<Book> {
        let snapshot = self.storage.book.load()?;
        let mut book = Book::new();
        let mut service = BookService::new(&mut book);
        service.bulk_load(snapshot.transactions)?;
        service.restore_pending(snapshot.scheduled);
        Ok(book)
    }

    pub fn save_book(&self, book: &Book) -> PocketbookResult<()> {
        self.storage.book.save(book)?;
        info!(
            transactions = book.ledger.len(),
            scheduled = book.pending.len(),
            "book saved"
        );
        Ok(())
    }

    /// A service over `book`, audited when the settings ask for it
    pub fn service<'a>(&'a self, book: &'a mut Book) -> BookService<'a> {
        let service = BookService::new(book);
        if self.settings.audit_enabled {
            service.with_audit(&self.audit)
        } else {
            service
        }
    }

    /// Load, run `op`, and save whatever changed
    ///
    /// The book is saved even when `op` fails, so that bills processed
    /// before a failing one stay committed.
    pub fn mutate<T, F>(&self, op: F) -> PocketbookResult<T>
    where
        F: FnOnce(&mut BookService<'_>) -> PocketbookResult<T>,
    {
        let mut book = self.load_book()?;
        let before = book.clone();

        let result = {
            let mut service = self.service(&mut book);
            op(&mut service)
        };

        if book != before {
            self.save_book(&book)?;
        }
        result
    }

    /// Load and run a read-only `op`
    pub fn read<T, F>(&self, op: F) -> PocketbookResult<T>
    where
        F: FnOnce(&BookService<'_>) -> PocketbookResult<T>,
    {
        let mut book = self.load_book()?;
        let service = BookService::new(&mut book);
        op(&service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PocketbookError;
    use crate::models::{Money, Transaction};
    use tempfile::TempDir;

    fn open_session(audit_enabled: bool) -> (TempDir, Session) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled,
            ..Settings::default()
        };
        let session = Session::open(paths, settings).unwrap();
        (temp_dir, session)
    }

    #[test]
    fn test_mutation_persists_between_loads() {
        let (_temp_dir, session) = open_session(true);

        session
            .mutate(|s| s.add_and_commit(Transaction::new("Food", Money::from_cents(-2550), "", "11/3/2025")))
            .unwrap();

        let book = session.load_book().unwrap();
        assert_eq!(book.ledger.len(), 1);
        assert_eq!(book.budget.total_expenses().cents(), 2550);
        assert_eq!(book.history.len(), 1);
        assert_eq!(session.audit().entry_count().unwrap(), 1);
    }

    #[test]
    fn test_failed_mutation_does_not_write() {
        let (_temp_dir, session) = open_session(true);

        let err = session.mutate(|s| s.undo_last()).unwrap_err();
        assert!(err.is_empty_collection());
        assert!(!session.storage().book.exists());
    }

    #[test]
    fn test_partial_drain_is_saved() {
        let (_temp_dir, session) = open_session(false);

        let bill = Transaction::new("Bills", Money::from_cents(4000), "Power", "12/1/2025");
        let committed = bill.clone().into_expense();
        session
            .mutate(|s| {
                s.add_and_commit(committed.clone())?;
                s.schedule_bill(Transaction::new("Bills", Money::from_cents(100), "", "12/2/2025"));
                s.schedule_bill(bill);
                Ok(())
            })
            .unwrap();

        let err = session.mutate(|s| s.process_queue()).unwrap_err();
        assert!(matches!(err, PocketbookError::QueueDrainFailed { processed: 1, .. }));

        let book = session.load_book().unwrap();
        assert_eq!(book.ledger.len(), 2);
        assert!(book.pending.is_empty());
        assert_eq!(session.audit().entry_count().unwrap(), 0);
    }
}
