//! Session storage.
//!
//! Sessions are kept as one JSON array under the `sessions` key of a
//! [`KeyValueStore`], newest first.

use super::session::{SessionRecord, SessionSink};
use crate::error::FocusError;
use crate::storage::{Database, KeyValueStore};

/// Key holding the serialized session list.
pub const SESSIONS_KEY: &str = "sessions";

/// Storage for focus sessions.
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl SessionStore<Database> {
    /// Open session storage in the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, FocusError> {
        Ok(Self::new(Database::open()?))
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Wrap a key-value store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read every stored session, newest first.
    ///
    /// A missing key or a value that is not a JSON array yields an empty
    /// list. Elements that do not decode as sessions are skipped, so the
    /// readable ones survive the next write.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backing store itself fails.
    pub fn load_all(&self) -> Result<Vec<SessionRecord>, FocusError> {
        let Some(raw) = self.store.get(SESSIONS_KEY)? else {
            return Ok(Vec::new());
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(error = %e, "stored sessions are unreadable, treating as empty");
                return Ok(Vec::new());
            }
        };

        let mut sessions = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value(value) {
                Ok(session) => sessions.push(session),
                Err(e) => tracing::warn!(index, error = %e, "skipping unreadable stored session"),
            }
        }

        Ok(sessions)
    }

    /// Prepend a session to the stored list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written back, including
    /// [`FocusError::StorageFull`].
    pub fn prepend(&mut self, record: SessionRecord) -> Result<(), FocusError> {
        let mut sessions = self.load_all()?;
        sessions.insert(0, record);

        let raw = serde_json::to_string(&sessions)?;
        self.store.set(SESSIONS_KEY, &raw)?;
        tracing::debug!(count = sessions.len(), "saved focus sessions");

        Ok(())
    }

    /// Delete every stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be removed.
    pub fn clear_all(&mut self) -> Result<(), FocusError> {
        self.store.remove(SESSIONS_KEY)?;
        tracing::info!("cleared focus session history");
        Ok(())
    }
}

impl<S: KeyValueStore> SessionSink for SessionStore<S> {
    fn record(&mut self, record: SessionRecord) -> Result<(), FocusError> {
        self.prepend(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockKeyValueStore};
    use chrono::{TimeZone, Utc};

    fn record(id: i64, length_sec: u64) -> SessionRecord {
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        SessionRecord::new(id, length_sec, "Focus", ts)
    }

    fn create_test_storage() -> SessionStore<Database> {
        let db = Database::open_in_memory().unwrap();
        SessionStore::new(db)
    }

    #[test]
    fn test_load_all_empty() {
        let storage = create_test_storage();
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut storage = create_test_storage();

        storage.prepend(record(1, 60)).unwrap();
        storage.prepend(record(2, 120)).unwrap();
        storage.prepend(record(3, 180)).unwrap();

        let ids: Vec<i64> = storage.load_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_clear_all() {
        let mut storage = create_test_storage();
        storage.prepend(record(1, 60)).unwrap();
        storage.prepend(record(2, 60)).unwrap();

        storage.clear_all().unwrap();
        assert!(storage.load_all().unwrap().is_empty());

        // Clearing an empty store is fine too
        storage.clear_all().unwrap();
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_data_reads_as_empty() {
        let mut kv = MemoryStore::new();
        kv.set(SESSIONS_KEY, "{not json").unwrap();
        let mut storage = SessionStore::new(kv);

        assert!(storage.load_all().unwrap().is_empty());

        // Writing over corrupt data starts a fresh list
        storage.prepend(record(1, 60)).unwrap();
        assert_eq!(storage.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_bad_element_keeps_readable_sessions() {
        let good = serde_json::to_value(record(2, 600)).unwrap();
        let bad = serde_json::json!({
            "id": 1,
            "lengthSec": 1.5,
            "label": "Focus",
            "timestamp": "2024-03-10T08:00:00Z"
        });

        let mut kv = MemoryStore::new();
        kv.set(SESSIONS_KEY, &serde_json::to_string(&vec![good, bad]).unwrap())
            .unwrap();
        let mut storage = SessionStore::new(kv);

        let sessions = storage.load_all().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, 2);

        storage.prepend(record(3, 60)).unwrap();
        let ids: Vec<i64> = storage.load_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_non_array_reads_as_empty() {
        let mut kv = MemoryStore::new();
        kv.set(SESSIONS_KEY, r#"{"id": 1}"#).unwrap();
        let storage = SessionStore::new(kv);

        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_full_store_reports_error() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get().returning(|_| Ok(None));
        kv.expect_set()
            .returning(|_, _| Err(FocusError::StorageFull("quota exceeded".to_string())));

        let mut storage = SessionStore::new(kv);
        let err = storage.prepend(record(1, 60)).unwrap_err();
        assert!(err.is_storage_full());
    }

    #[test]
    fn test_clear_removes_sessions_key() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_remove()
            .withf(|key| key == SESSIONS_KEY)
            .times(1)
            .returning(|_| Ok(()));

        let mut storage = SessionStore::new(kv);
        storage.clear_all().unwrap();
    }
}
