//! `quiz` command: print the active quiz definition.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_QUIZ, CliError,
    inputs::{load_quiz, write_json},
};

/// CLI arguments for the `quiz` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the quiz a team answers as JSON. Each option lists \
                 the category points it adds when selected.",
    about = "Print the active quiz definition"
)]
#[ortho_config(prefix = "TEAMFIT")]
pub(crate) struct QuizArgs {
    /// Path to a JSON quiz document replacing the built-in quiz.
    #[arg(long = ARG_QUIZ, value_name = "path")]
    #[serde(default)]
    pub(crate) quiz: Option<Utf8PathBuf>,
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_quiz_with(args, &mut stdout)
}

pub(crate) fn run_quiz_with(args: QuizArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let quiz = load_quiz(merged.quiz.as_deref())?;
    write_json(writer, quiz.as_ref())
}
