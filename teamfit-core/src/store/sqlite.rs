//! `SQLite`-backed profile store.
//!
//! Each session owns one row holding its profile as JSON. Saves are a single
//! upsert statement, so a write either lands completely or not at all.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::debug;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use super::{ProfileStore, SessionId};
use crate::Profile;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS team_profiles (
        session_id TEXT PRIMARY KEY NOT NULL,
        profile TEXT NOT NULL
    )";
const LOAD_SQL: &str = "SELECT profile FROM team_profiles WHERE session_id = ?1";
const SAVE_SQL: &str = "INSERT INTO team_profiles (session_id, profile) VALUES (?1, ?2)
     ON CONFLICT(session_id) DO UPDATE SET profile = excluded.profile";
const CLEAR_SQL: &str = "DELETE FROM team_profiles WHERE session_id = ?1";

/// Errors raised by [`SqliteProfileStore`].
#[derive(Debug, Error)]
pub enum SqliteProfileStoreError {
    /// Opening the database failed.
    #[error("failed to open SQLite database at {}: {source}", path.display())]
    OpenDatabase {
        /// Requested database location.
        path: PathBuf,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a statement failed.
    #[error("failed to {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A profile could not be encoded for storage.
    #[error("failed to encode profile for session {session}: {source}")]
    EncodeProfile {
        /// Session being saved.
        session: SessionId,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A stored profile could not be decoded.
    #[error("failed to decode stored profile for session {session}: {source}")]
    DecodeProfile {
        /// Session being loaded.
        session: SessionId,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A previous holder of the connection panicked.
    #[error("profile store connection lock was poisoned")]
    LockPoisoned,
}

/// Durable [`ProfileStore`] keeping one row per session.
#[derive(Debug)]
pub struct SqliteProfileStore {
    connection: Mutex<Connection>,
}

impl SqliteProfileStore {
    /// Open (creating if needed) a profile database at `path`.
    ///
    /// # Errors
    /// Returns [`SqliteProfileStoreError`] when the database cannot be opened
    /// or the schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SqliteProfileStoreError> {
        let path = path.as_ref();
        let connection =
            Connection::open(path).map_err(|source| SqliteProfileStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_connection(connection)
    }

    /// Open a private in-memory database, mostly useful in tests.
    ///
    /// # Errors
    /// Returns [`SqliteProfileStoreError`] when `SQLite` refuses the schema.
    pub fn open_in_memory() -> Result<Self, SqliteProfileStoreError> {
        let connection =
            Connection::open_in_memory().map_err(|source| SqliteProfileStoreError::OpenDatabase {
                path: PathBuf::from(":memory:"),
                source,
            })?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self, SqliteProfileStoreError> {
        connection
            .execute(CREATE_TABLE_SQL, [])
            .map_err(|source| SqliteProfileStoreError::Query {
                operation: "create the team_profiles table",
                source,
            })?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, SqliteProfileStoreError> {
        self.connection
            .lock()
            .map_err(|_| SqliteProfileStoreError::LockPoisoned)
    }
}

impl ProfileStore for SqliteProfileStore {
    type Error = SqliteProfileStoreError;

    fn load(&self, session: &SessionId) -> Result<Option<Profile>, Self::Error> {
        let connection = self.lock()?;
        let payload: Option<String> = connection
            .query_row(LOAD_SQL, params![session.as_str()], |row| row.get(0))
            .optional()
            .map_err(|source| SqliteProfileStoreError::Query {
                operation: "load a stored profile",
                source,
            })?;
        payload
            .map(|json| {
                serde_json::from_str(&json).map_err(|source| {
                    SqliteProfileStoreError::DecodeProfile {
                        session: session.clone(),
                        source,
                    }
                })
            })
            .transpose()
    }

    fn save(&self, session: &SessionId, profile: &Profile) -> Result<(), Self::Error> {
        let payload = serde_json::to_string(profile).map_err(|source| {
            SqliteProfileStoreError::EncodeProfile {
                session: session.clone(),
                source,
            }
        })?;
        let connection = self.lock()?;
        connection
            .execute(SAVE_SQL, params![session.as_str(), payload])
            .map_err(|source| SqliteProfileStoreError::Query {
                operation: "save a profile",
                source,
            })?;
        debug!("saved profile for session {session}");
        Ok(())
    }

    fn clear(&self, session: &SessionId) -> Result<(), Self::Error> {
        let connection = self.lock()?;
        let removed = connection
            .execute(CLEAR_SQL, params![session.as_str()])
            .map_err(|source| SqliteProfileStoreError::Query {
                operation: "clear a profile",
                source,
            })?;
        debug!("cleared {removed} profile row(s) for session {session}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Percentages, ScoreVector};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn session() -> SessionId {
        SessionId::new("team-a").expect("valid session")
    }

    fn profile(points: u32) -> Profile {
        let mut percentages = Percentages::zero();
        percentages.set(Category::History, 100);
        Profile {
            scores: ScoreVector::zero().with_score(Category::History, points),
            percentages,
            top_categories: vec![Category::History, Category::Adventure, Category::Nature],
        }
    }

    #[rstest]
    fn first_visit_loads_nothing(session: SessionId) {
        let store = SqliteProfileStore::open_in_memory().expect("open store");
        assert!(store.load(&session).expect("load").is_none());
    }

    #[rstest]
    fn upsert_replaces_previous_profile(session: SessionId) {
        let store = SqliteProfileStore::open_in_memory().expect("open store");
        store.save(&session, &profile(2)).expect("first save");
        store.save(&session, &profile(5)).expect("second save");
        assert_eq!(store.load(&session).expect("load"), Some(profile(5)));
    }

    #[rstest]
    fn profiles_survive_reopening(session: SessionId) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("profiles.db");
        {
            let store = SqliteProfileStore::open(&path).expect("open store");
            store.save(&session, &profile(4)).expect("save");
        }
        let reopened = SqliteProfileStore::open(&path).expect("reopen store");
        assert_eq!(reopened.load(&session).expect("load"), Some(profile(4)));
    }

    #[rstest]
    fn clear_removes_profile(session: SessionId) {
        let store = SqliteProfileStore::open_in_memory().expect("open store");
        store.save(&session, &profile(1)).expect("save");
        store.clear(&session).expect("clear");
        assert!(store.load(&session).expect("load").is_none());
        store.clear(&session).expect("clearing twice succeeds");
    }

    #[rstest]
    fn corrupt_rows_surface_decode_errors(session: SessionId) {
        let store = SqliteProfileStore::open_in_memory().expect("open store");
        store
            .lock()
            .expect("lock")
            .execute(SAVE_SQL, params![session.as_str(), "not json"])
            .expect("insert corrupt row");
        let err = store.load(&session).expect_err("decode should fail");
        assert!(matches!(err, SqliteProfileStoreError::DecodeProfile { .. }));
    }
}
