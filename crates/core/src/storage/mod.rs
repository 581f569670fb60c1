//! SQLite-backed slot storage for the campus core
//!
//! One `slots` table, one row per aggregate snapshot. Saves replace the row
//! whole, so a snapshot is never observed half-written. There is no
//! cross-process coordination: two processes sharing one database
//! last-writer-win, which the single-process client accepts.

mod slots;

pub use slots::{load_slot, save_slot, MemorySlots, SlotStore};

use std::path::{Path, PathBuf};

use chrono::Utc;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::instrument;

use crate::error::StorageError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS slots (
    name TEXT PRIMARY KEY,
    snapshot TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Default database location in the per-user data directory
    pub fn default_path() -> Result<PathBuf, StorageError> {
        let dirs = ProjectDirs::from("dev", "campus", "campus").ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;
        std::fs::create_dir_all(dirs.data_dir())?;
        Ok(dirs.data_dir().join("campus.db"))
    }

    fn init(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}

impl SlotStore for Database {
    fn load(&self, name: &str) -> Result<Option<String>, StorageError> {
        let snapshot = self
            .conn
            .query_row(
                "SELECT snapshot FROM slots WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(snapshot)
    }

    fn save(&self, name: &str, snapshot: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (name, snapshot, updated_at) VALUES (?1, ?2, ?3)",
            params![name, snapshot, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
