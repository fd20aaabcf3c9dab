//! Recipe persistence on SQLite.
//!
//! A single `recipes` table, created on open if absent. Records are only
//! ever created whole, so a failed scrape leaves nothing behind.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS recipes (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    body TEXT NOT NULL,
    link TEXT NOT NULL
)";

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeRecord {
    pub id: i64,
    pub name: String,
    pub link: String,
    pub body: String,
}

impl RecipeRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            link: row.get("link")?,
            body: row.get("body")?,
        })
    }
}

/// Thread-safe handle to the recipe table.
#[derive(Debug)]
pub struct RecipeStore {
    conn: Mutex<Connection>,
}

impl RecipeStore {
    /// Open (or create) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be opened or the schema
    /// cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening recipe store");
        Self::init(Connection::open(path)?)
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if SQLite fails to initialise.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::Storage("connection lock poisoned".into()))
    }

    /// All recipes in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] on query failure.
    pub fn list(&self) -> Result<Vec<RecipeRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name, link, body FROM recipes ORDER BY id")?;
        let rows = stmt.query_map([], RecipeRecord::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Insert a recipe and return it with its new id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] on insert failure.
    pub fn insert(&self, name: &str, body: &str, link: &str) -> Result<RecipeRecord> {
        let conn = self.conn()?;
        let record = conn.query_row(
            "INSERT INTO recipes (name, body, link) VALUES (?1, ?2, ?3)
             RETURNING id, name, link, body",
            params![name, body, link],
            RecipeRecord::from_row,
        )?;
        debug!(id = record.id, "recipe inserted");
        Ok(record)
    }

    /// Replace the body of recipe `id`. `None` when no such recipe exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] on update failure.
    pub fn update_body(&self, id: i64, body: &str) -> Result<Option<RecipeRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                "UPDATE recipes SET body = ?1 WHERE id = ?2 RETURNING id, name, link, body",
                params![body, id],
                RecipeRecord::from_row,
            )
            .optional()?;
        Ok(record)
    }
}
