//! `reset` command: forget the profile remembered for a session.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use teamfit_core::{ProfileStore, SessionId};

use crate::{
    ARG_SESSION, ARG_STORE, CliError, DEFAULT_STORE_PATH,
    inputs::write_json,
    store::{clear_profile, open_store, resolve_session},
};

/// CLI arguments for the `reset` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Forget the stored profile so the team can retake the quiz")]
#[ortho_config(prefix = "TEAMFIT")]
pub(crate) struct ResetArgs {
    /// Session whose profile is forgotten.
    #[arg(long = ARG_SESSION, value_name = "id")]
    #[serde(default)]
    pub(crate) session: Option<String>,
    /// Path to the SQLite profile database.
    #[arg(long = ARG_STORE, value_name = "path")]
    #[serde(default)]
    pub(crate) store: Option<Utf8PathBuf>,
}

/// Resolved `reset` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResetConfig {
    pub(crate) session: SessionId,
    pub(crate) store: Utf8PathBuf,
}

impl ResetArgs {
    pub(crate) fn into_config(self) -> Result<ResetConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ResetConfig::try_from(merged)
    }
}

impl TryFrom<ResetArgs> for ResetConfig {
    type Error = CliError;

    fn try_from(args: ResetArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            session: resolve_session(args.session)?,
            store: args
                .store
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STORE_PATH)),
        })
    }
}

/// JSON document printed by `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ResetReport {
    pub(crate) session: String,
    pub(crate) cleared: bool,
}

pub(crate) fn run_reset(args: ResetArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = open_store(&config.store)?;
    let mut stdout = std::io::stdout().lock();
    run_reset_with(&config, &store, &mut stdout)
}

pub(crate) fn run_reset_with<S: ProfileStore>(
    config: &ResetConfig,
    store: &S,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    clear_profile(store, &config.session)?;
    let report = ResetReport {
        session: config.session.to_string(),
        cleared: true,
    };
    write_json(writer, &report)
}
