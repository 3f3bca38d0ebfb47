// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key-value persistence for the record store.
//!
//! [`SqliteStorage`] keeps one JSON document per key in a single `kv` table.
//! [`MemoryStorage`] is the in-process equivalent used by tests.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// SQL schema for the key-value store.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Persistence collaborator of the store.
pub trait Storage {
    /// Returns the document stored under `key`, or `None` if it is missing
    /// or cannot be read or parsed.
    fn load(&self, key: &str) -> Option<Value>;

    /// Replaces the document stored under `key`.
    fn save(&self, key: &str, value: &Value) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn load(&self, key: &str) -> Option<Value> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        (**self).save(key, value)
    }
}

/// SQLite-backed storage.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the store file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("opened store at {}", path.display());
        Ok(SqliteStorage { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStorage { conn })
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let raw = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(raw)
    }
}

impl Storage for SqliteStorage {
    fn load(&self, key: &str) -> Option<Value> {
        let raw = match self.read_raw(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("failed to read '{}': {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring unparseable '{}': {}", key, e);
                None
            }
        }
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

/// In-memory storage holding serialized documents.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail, as a full or unavailable store would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Store a raw string under `key`, bypassing serialization.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<Value> {
        let entries = self.entries.borrow();
        let raw = entries.get(key)?;
        serde_json::from_str(raw).ok()
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::Io(std::io::Error::other("storage quota exceeded")));
        }
        let json = serde_json::to_string(value)?;
        self.entries.borrow_mut().insert(key.to_string(), json);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
