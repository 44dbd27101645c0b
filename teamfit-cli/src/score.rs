//! `score` command: turn a quiz selection into a stored team profile.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use teamfit_core::{DEFAULT_TOP_K, Profile, ProfileStore, SessionId, UserSelection};
use teamfit_scorer::ScoreAggregator;

use crate::{
    ARG_QUIZ, ARG_SCORE_SELECTION, ARG_SESSION, ARG_STORE, ARG_TOP_K, CliError,
    DEFAULT_STORE_PATH, ENV_SCORE_SELECTION,
    inputs::{load_json, load_quiz, write_json},
    store::{open_store, resolve_session, save_profile},
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a quiz selection and remember the profile for the \
                 session. The selection is a JSON array holding one array \
                 of chosen option indices per question.",
    about = "Score a quiz selection"
)]
#[ortho_config(prefix = "TEAMFIT")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the selection.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) selection: Option<Utf8PathBuf>,
    /// Session the profile is remembered under.
    #[arg(long = ARG_SESSION, value_name = "id")]
    #[serde(default)]
    pub(crate) session: Option<String>,
    /// Path to the SQLite profile database.
    #[arg(long = ARG_STORE, value_name = "path")]
    #[serde(default)]
    pub(crate) store: Option<Utf8PathBuf>,
    /// Path to a JSON quiz document replacing the built-in quiz.
    #[arg(long = ARG_QUIZ, value_name = "path")]
    #[serde(default)]
    pub(crate) quiz: Option<Utf8PathBuf>,
    /// Number of top categories kept in the profile.
    #[arg(long = ARG_TOP_K, value_name = "count")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) selection: Utf8PathBuf,
    pub(crate) session: SessionId,
    pub(crate) store: Utf8PathBuf,
    pub(crate) quiz: Option<Utf8PathBuf>,
    pub(crate) top_k: usize,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let selection = args.selection.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_SELECTION,
            env: ENV_SCORE_SELECTION,
        })?;
        Ok(Self {
            selection,
            session: resolve_session(args.session)?,
            store: args
                .store
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STORE_PATH)),
            quiz: args.quiz,
            top_k: args.top_k.unwrap_or(DEFAULT_TOP_K),
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = open_store(&config.store)?;
    let mut stdout = std::io::stdout().lock();
    run_score_with(&config, &store, &mut stdout)
}

pub(crate) fn run_score_with<S: ProfileStore>(
    config: &ScoreConfig,
    store: &S,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let profile = score_selection(config)?;
    save_profile(store, &config.session, &profile)?;
    write_json(writer, &profile)
}

fn score_selection(config: &ScoreConfig) -> Result<Profile, CliError> {
    let quiz = load_quiz(config.quiz.as_deref())?;
    let selection = load_selection(&config.selection)?;
    let profile = ScoreAggregator::new(&quiz)
        .with_top_k(config.top_k)
        .aggregate(&selection)?;
    Ok(profile)
}

fn load_selection(path: &Utf8Path) -> Result<UserSelection, CliError> {
    load_json(path, ARG_SCORE_SELECTION)
}
