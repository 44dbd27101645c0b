//! Error types emitted by the teamfit CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use teamfit_core::{SessionId, SessionIdError, SqliteProfileStoreError};
use teamfit_scorer::ScoringError;
use thiserror::Error;

/// Errors emitted by the teamfit CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument naming the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input document failed.
    #[error("failed to read {field} from {path:?}: {source}")]
    ReadInput {
        /// Argument naming the path.
        field: &'static str,
        /// The path being read.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input document was not valid JSON for its type.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Argument naming the path.
        field: &'static str,
        /// The path being parsed.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The configured session identifier was blank.
    #[error("invalid session: {0}")]
    InvalidSession(#[from] SessionIdError),
    /// Creating the directory for the profile database failed.
    #[error("failed to prepare profile store directory for {path:?}: {source}")]
    PrepareStore {
        /// Database path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the profile database failed.
    #[error("failed to open profile store at {path:?}: {source}")]
    OpenStore {
        /// Database path.
        path: Utf8PathBuf,
        /// Underlying store failure.
        #[source]
        source: SqliteProfileStoreError,
    },
    /// Loading, saving or clearing a profile failed.
    #[error("failed to {action} profile for session {session}: {source}")]
    ProfileStore {
        /// Store operation that failed.
        action: &'static str,
        /// Session the operation targeted.
        session: SessionId,
        /// Backend failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Scoring the selection or filtering the catalog failed.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
