//! Persistence boundary for team profiles.
//!
//! The [`ProfileStore`] trait keeps the scoring code independent of any
//! storage backend. Stores are keyed by [`SessionId`]; a missing entry is a
//! normal first-visit state, never an error. Writes replace the whole profile
//! at once so readers never observe a half-written one.

use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{PoisonError, RwLock},
};

use thiserror::Error;

use crate::Profile;

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteProfileStore, SqliteProfileStoreError};

/// Identifier of the session or user a profile belongs to.
///
/// # Examples
/// ```
/// use teamfit_core::SessionId;
///
/// let id = SessionId::new("team-42").unwrap();
/// assert_eq!(id.as_str(), "team-42");
/// assert!(SessionId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

/// Errors returned by [`SessionId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionIdError {
    /// The identifier was empty or whitespace.
    #[error("session id must not be blank")]
    Blank,
}

impl SessionId {
    /// Validate and wrap a session identifier.
    ///
    /// # Errors
    /// Returns [`SessionIdError::Blank`] for empty or whitespace input.
    pub fn new(id: impl Into<String>) -> Result<Self, SessionIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SessionIdError::Blank);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = SessionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Keyed storage for the most recent profile of each session.
///
/// Implementations must be thread-safe and must make [`ProfileStore::save`]
/// atomic per session: concurrent saves resolve to whichever finished last.
pub trait ProfileStore: Send + Sync {
    /// Failure raised by the backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the stored profile, or `None` for a session with no profile.
    ///
    /// # Errors
    /// Propagates backend failures.
    fn load(&self, session: &SessionId) -> Result<Option<Profile>, Self::Error>;

    /// Replace the stored profile for `session`.
    ///
    /// # Errors
    /// Propagates backend failures.
    fn save(&self, session: &SessionId, profile: &Profile) -> Result<(), Self::Error>;

    /// Forget the stored profile. Clearing an unknown session succeeds.
    ///
    /// # Errors
    /// Propagates backend failures.
    fn clear(&self, session: &SessionId) -> Result<(), Self::Error>;
}

/// In-process [`ProfileStore`] backed by a locked map.
///
/// # Examples
/// ```
/// use teamfit_core::{MemoryProfileStore, ProfileStore, SessionId};
///
/// let store = MemoryProfileStore::new();
/// let session = SessionId::new("demo").unwrap();
/// assert_eq!(store.load(&session).unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<SessionId, Profile>>,
}

impl MemoryProfileStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions holding a profile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Report whether no session holds a profile.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for MemoryProfileStore {
    type Error = Infallible;

    fn load(&self, session: &SessionId) -> Result<Option<Profile>, Self::Error> {
        let profiles = self.profiles.read().unwrap_or_else(PoisonError::into_inner);
        Ok(profiles.get(session).cloned())
    }

    fn save(&self, session: &SessionId, profile: &Profile) -> Result<(), Self::Error> {
        let mut profiles = self.profiles.write().unwrap_or_else(PoisonError::into_inner);
        profiles.insert(session.clone(), profile.clone());
        Ok(())
    }

    fn clear(&self, session: &SessionId) -> Result<(), Self::Error> {
        let mut profiles = self.profiles.write().unwrap_or_else(PoisonError::into_inner);
        profiles.remove(session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Percentages, ScoreVector};
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> SessionId {
        SessionId::new("team-a").unwrap()
    }

    fn profile(points: u32) -> Profile {
        Profile {
            scores: ScoreVector::zero().with_score(Category::Culinary, points),
            percentages: Percentages::zero(),
            top_categories: vec![Category::Culinary],
        }
    }

    #[rstest]
    #[case("")]
    #[case(" \t")]
    fn blank_session_ids_are_rejected(#[case] raw: &str) {
        assert_eq!(SessionId::new(raw), Err(SessionIdError::Blank));
    }

    #[rstest]
    fn save_then_load(session: SessionId) {
        let store = MemoryProfileStore::new();
        store.save(&session, &profile(3)).unwrap();
        assert_eq!(store.load(&session).unwrap(), Some(profile(3)));
    }

    #[rstest]
    fn last_write_wins(session: SessionId) {
        let store = MemoryProfileStore::new();
        store.save(&session, &profile(1)).unwrap();
        store.save(&session, &profile(7)).unwrap();
        assert_eq!(store.load(&session).unwrap(), Some(profile(7)));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn clear_forgets_only_that_session(session: SessionId) {
        let store = MemoryProfileStore::new();
        let other = SessionId::new("team-b").unwrap();
        store.save(&session, &profile(1)).unwrap();
        store.save(&other, &profile(2)).unwrap();
        store.clear(&session).unwrap();
        assert_eq!(store.load(&session).unwrap(), None);
        assert_eq!(store.load(&other).unwrap(), Some(profile(2)));
    }

    #[rstest]
    fn clearing_unknown_session_succeeds(session: SessionId) {
        let store = MemoryProfileStore::new();
        assert!(store.clear(&session).is_ok());
        assert!(store.is_empty());
    }
}
