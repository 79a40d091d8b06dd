//! Session snapshot storage - one durable key holding the current user.

use crate::models::User;
use anyhow::Result;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

pub const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

const CURRENT_USER_KEY: &str = "current_user";

/// Key-value storage for the session snapshot.
///
/// The snapshot is written on login and removed on logout; it is restored on
/// startup without re-validation against the store.
pub struct SessionStorage {
    db: Arc<Database>,
}

impl SessionStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(SESSION_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Open (creating if needed) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);
        Self::new(db)
    }

    /// Store raw snapshot bytes.
    pub fn put_raw(&self, key: &str, data: &[u8]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.insert(key, data)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get raw snapshot bytes by key.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        if let Some(value) = table.get(key)? {
            Ok(Some(value.value().to_vec()))
        } else {
            Ok(None)
        }
    }

    /// Delete by key, returns true if a value existed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(key)?.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    /// Persist the current-user snapshot.
    pub fn save_current_user(&self, user: &User) -> Result<()> {
        let bytes = serde_json::to_vec(user)?;
        self.put_raw(CURRENT_USER_KEY, &bytes)
    }

    /// Load the persisted snapshot, if any. A snapshot that no longer
    /// deserializes (schema drift) is treated as absent.
    pub fn load_current_user(&self) -> Result<Option<User>> {
        let Some(bytes) = self.get_raw(CURRENT_USER_KEY)? else {
            return Ok(None);
        };
        Ok(serde_json::from_slice(&bytes).ok())
    }

    /// Remove the persisted snapshot, returns true if one existed.
    pub fn clear_current_user(&self) -> Result<bool> {
        self.delete(CURRENT_USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use tempfile::tempdir;

    #[test]
    fn save_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let storage = SessionStorage::open(temp_dir.path().join("test.db")).unwrap();

        assert!(storage.load_current_user().unwrap().is_none());

        let user = seed::users().remove(1);
        storage.save_current_user(&user).unwrap();

        let loaded = storage.load_current_user().unwrap().unwrap();
        assert_eq!(loaded, user);
    }

    #[test]
    fn snapshot_survives_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("test.db");

        let user = seed::users().remove(0);
        {
            let storage = SessionStorage::open(&path).unwrap();
            storage.save_current_user(&user).unwrap();
        }

        let storage = SessionStorage::open(&path).unwrap();
        assert_eq!(storage.load_current_user().unwrap().unwrap(), user);
    }

    #[test]
    fn clear_removes_snapshot() {
        let temp_dir = tempdir().unwrap();
        let storage = SessionStorage::open(temp_dir.path().join("test.db")).unwrap();

        let user = seed::users().remove(0);
        storage.save_current_user(&user).unwrap();

        assert!(storage.clear_current_user().unwrap());
        assert!(storage.load_current_user().unwrap().is_none());
        assert!(!storage.clear_current_user().unwrap());
    }

    #[test]
    fn undecodable_snapshot_is_treated_as_absent() {
        let temp_dir = tempdir().unwrap();
        let storage = SessionStorage::open(temp_dir.path().join("test.db")).unwrap();

        storage.put_raw("current_user", b"not json").unwrap();
        assert!(storage.load_current_user().unwrap().is_none());
    }
}
