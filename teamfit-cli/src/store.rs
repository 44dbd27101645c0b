//! Session resolution and profile store access shared by the commands.

use camino::Utf8Path;
use teamfit_core::{Profile, ProfileStore, SessionId, SqliteProfileStore};

use crate::{CliError, DEFAULT_SESSION};

/// Validate the configured session, falling back to [`DEFAULT_SESSION`].
pub(crate) fn resolve_session(session: Option<String>) -> Result<SessionId, CliError> {
    let raw = session.unwrap_or_else(|| DEFAULT_SESSION.to_owned());
    SessionId::new(raw).map_err(CliError::from)
}

/// Open the profile database at `path`, creating its directory if needed.
pub(crate) fn open_store(path: &Utf8Path) -> Result<SqliteProfileStore, CliError> {
    teamfit_fs::ensure_parent_dir(path).map_err(|source| CliError::PrepareStore {
        path: path.to_path_buf(),
        source,
    })?;
    SqliteProfileStore::open(path.as_std_path()).map_err(|source| CliError::OpenStore {
        path: path.to_path_buf(),
        source,
    })
}

fn store_failure<'a, E>(
    action: &'static str,
    session: &'a SessionId,
) -> impl FnOnce(E) -> CliError + 'a
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |source| CliError::ProfileStore {
        action,
        session: session.clone(),
        source: Box::new(source),
    }
}

pub(crate) fn load_profile<S: ProfileStore>(
    store: &S,
    session: &SessionId,
) -> Result<Option<Profile>, CliError> {
    store.load(session).map_err(store_failure("load", session))
}

pub(crate) fn save_profile<S: ProfileStore>(
    store: &S,
    session: &SessionId,
    profile: &Profile,
) -> Result<(), CliError> {
    store
        .save(session, profile)
        .map_err(store_failure("save", session))?;
    log::info!("saved profile for session {session}");
    Ok(())
}

pub(crate) fn clear_profile<S: ProfileStore>(
    store: &S,
    session: &SessionId,
) -> Result<(), CliError> {
    store.clear(session).map_err(store_failure("clear", session))?;
    log::info!("cleared profile for session {session}");
    Ok(())
}
