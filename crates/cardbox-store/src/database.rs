//! Store handle and connection management.
//!
//! [`CardStore`] owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation.  The handle is intended
//! for single-user, single-device use; there is no cross-operation
//! atomicity and no locking.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::Connection;

use crate::error::{Result, StoreError};
use crate::migrations;

/// Handle over the local card database.
pub struct CardStore {
    conn: Connection,
}

impl CardStore {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data
    /// directory, e.g. `~/.local/share/cardbox/cardbox.db` on Linux.
    pub fn open() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "cardbox", "cardbox").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("cardbox.db");

        tracing::info!(path = %db_path.display(), "opening card database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Recommended SQLite settings.
        conn.pragma_update(None, "journal_mode", "WAL")?;

        // Run schema migrations.
        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}
