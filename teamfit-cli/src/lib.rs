//! Command-line interface for scoring team quizzes and shortlisting
//! activities.
//!
//! Every command prints JSON on stdout; diagnostics go to stderr through the
//! subscriber installed by [`init_logging`].
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod inputs;
mod logging;
mod quiz;
mod recommend;
mod reset;
mod score;
mod store;

pub use error::CliError;
pub use logging::{DEFAULT_LOG_FILTER, LOG_ENV, init_logging};

use quiz::{QuizArgs, run_quiz};
use recommend::{RecommendArgs, run_recommend};
use reset::{ResetArgs, run_reset};
use score::{ScoreArgs, run_score};

pub(crate) const ARG_QUIZ: &str = "quiz";
pub(crate) const ARG_SESSION: &str = "session";
pub(crate) const ARG_STORE: &str = "store";
pub(crate) const ARG_TOP_K: &str = "top-k";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_MULTI_MATCH_BONUS: &str = "multi-match-bonus";
pub(crate) const ARG_SCORE_SELECTION: &str = "selection";
pub(crate) const ARG_RECOMMEND_CATALOG: &str = "catalog";
pub(crate) const ENV_SCORE_SELECTION: &str = "TEAMFIT_CMDS_SCORE_SELECTION";
pub(crate) const ENV_RECOMMEND_CATALOG: &str = "TEAMFIT_CMDS_RECOMMEND_CATALOG";

/// Session used when none is configured.
pub const DEFAULT_SESSION: &str = "default";
/// Profile database used when none is configured.
pub const DEFAULT_STORE_PATH: &str = "teamfit-profiles.db";

/// Run the teamfit CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] describing the first failure encountered.
pub fn run() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Quiz(args) => run_quiz(args),
        Command::Score(args) => run_score(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Reset(args) => run_reset(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "teamfit",
    about = "Profile a team with a short quiz and shortlist matching activities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the active quiz definition.
    Quiz(QuizArgs),
    /// Score a quiz selection and remember the resulting profile.
    Score(ScoreArgs),
    /// Shortlist catalog activities for the remembered profile.
    Recommend(RecommendArgs),
    /// Forget the remembered profile.
    Reset(ResetArgs),
}

#[cfg(test)]
mod tests;
