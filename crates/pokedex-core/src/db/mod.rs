// ============================================================================
// PokedexDb — Embedded key-value storage (redb)
// ============================================================================
// One string blob per key, read and written whole. This is the local-storage
// slot the favorites live in.
// Default path: ~/.pokedex/pokedex.redb (override via POKEDEX_DB_PATH env var)
// ============================================================================

use anyhow::{anyhow, Result};
use redb::{Database, ReadableTable, TableDefinition};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};

// Table definitions
const SLOTS: TableDefinition<&str, &str> = TableDefinition::new("slots");

/// Minimal get/set persistence capability: no transactions across keys,
/// no indexing. Callers read-modify-write whole values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Returns true if a value was present
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Embedded database for the viewer
pub struct PokedexDb {
    db: Database,
    path: PathBuf,
}

impl PokedexDb {
    /// Open (or create) the database at the given path.
    /// If `path` is None, uses POKEDEX_DB_PATH env var or ~/.pokedex/pokedex.redb
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let db_path = if let Some(p) = path {
            p.to_path_buf()
        } else if let Ok(env_path) = std::env::var("POKEDEX_DB_PATH") {
            PathBuf::from(env_path)
        } else {
            let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine home directory"))?;
            let pokedex_dir = home.join(".pokedex");
            std::fs::create_dir_all(&pokedex_dir)
                .map_err(|e| anyhow!("Failed to create .pokedex directory: {}", e))?;
            pokedex_dir.join("pokedex.redb")
        };

        info!("Opening database at: {}", db_path.display());

        let db = Database::create(&db_path)
            .map_err(|e| anyhow!("Failed to open database: {}", e))?;

        // Ensure the table exists so reads never hit a missing table
        let write_txn = db
            .begin_write()
            .map_err(|e| anyhow!("Failed to begin write: {}", e))?;
        {
            let _ = write_txn
                .open_table(SLOTS)
                .map_err(|e| anyhow!("Failed to create slots table: {}", e))?;
        }
        write_txn.commit().map_err(|e| anyhow!("Failed to commit init: {}", e))?;

        Ok(Self { db, path: db_path })
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored keys, in key order
    pub fn keys(&self) -> Result<Vec<String>> {
        let read_txn = self.db.begin_read()
            .map_err(|e| anyhow!("Failed to begin read: {}", e))?;
        let table = read_txn.open_table(SLOTS)
            .map_err(|e| anyhow!("Failed to open slots table: {}", e))?;

        let mut keys = Vec::new();
        let iter = table.range::<&str>(..)
            .map_err(|e| anyhow!("Failed to iterate slots: {}", e))?;
        for entry in iter {
            let (key, _value) = entry.map_err(|e| anyhow!("Failed to read entry: {}", e))?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}

impl KeyValueStore for PokedexDb {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let read_txn = self.db.begin_read()
            .map_err(|e| anyhow!("Failed to begin read: {}", e))?;
        let table = read_txn.open_table(SLOTS)
            .map_err(|e| anyhow!("Failed to open slots table: {}", e))?;

        let value = table
            .get(key)
            .map_err(|e| anyhow!("Failed to get '{}': {}", key, e))?
            .map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let write_txn = self.db.begin_write()
            .map_err(|e| anyhow!("Failed to begin write: {}", e))?;
        {
            let mut table = write_txn.open_table(SLOTS)
                .map_err(|e| anyhow!("Failed to open slots table: {}", e))?;
            table.insert(key, value)
                .map_err(|e| anyhow!("Failed to write '{}': {}", key, e))?;
        }
        write_txn.commit().map_err(|e| anyhow!("Failed to commit: {}", e))?;

        debug!("Stored {} bytes under {}", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let write_txn = self.db.begin_write()
            .map_err(|e| anyhow!("Failed to begin write: {}", e))?;
        let removed;
        {
            let mut table = write_txn.open_table(SLOTS)
                .map_err(|e| anyhow!("Failed to open slots table: {}", e))?;
            removed = table.remove(key)
                .map_err(|e| anyhow!("Failed to remove '{}': {}", key, e))?
                .is_some();
        }
        write_txn.commit().map_err(|e| anyhow!("Failed to commit delete: {}", e))?;

        if removed {
            debug!("Removed {}", key);
        }
        Ok(removed)
    }
}

/// In-memory store for tests and throwaway sessions
#[derive(Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().map_err(|_| anyhow!("Memory store lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().map_err(|_| anyhow!("Memory store lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut slots = self.slots.write().map_err(|_| anyhow!("Memory store lock poisoned"))?;
        Ok(slots.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redb_roundtrip_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dex.redb");

        {
            let db = PokedexDb::open(Some(&path)).unwrap();
            assert_eq!(db.path(), path.as_path());
            assert!(db.get("pokedexFavorites").unwrap().is_none());
            db.set("pokedexFavorites", "[]").unwrap();
            db.set("pokedexFavorites", "[{\"id\":1}]").unwrap();
        }

        let db = PokedexDb::open(Some(&path)).unwrap();
        assert_eq!(
            db.get("pokedexFavorites").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
        assert_eq!(db.keys().unwrap(), vec!["pokedexFavorites".to_string()]);
    }

    #[test]
    fn test_redb_remove() {
        let dir = tempfile::tempdir().unwrap();
        let db = PokedexDb::open(Some(&dir.path().join("dex.redb"))).unwrap();

        db.set("k", "v").unwrap();
        assert!(db.remove("k").unwrap());
        assert!(!db.remove("k").unwrap());
        assert!(db.get("k").unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert!(store.remove("k").unwrap());
        assert!(store.get("k").unwrap().is_none());
    }
}
