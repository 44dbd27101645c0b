//! Error types raised while scoring quizzes and filtering activities.
#![forbid(unsafe_code)]

use teamfit_core::Category;
use thiserror::Error;

/// Errors raised by the aggregator, the keyword table and the relevance filter.
///
/// Every variant is local to the call that raised it; callers can re-prompt
/// the quiz or fall back to the unfiltered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The selection does not have one row per quiz question.
    #[error("selection has {found} question rows but the quiz has {expected} questions")]
    InvalidSelectionShape {
        /// Number of questions in the quiz.
        expected: usize,
        /// Number of rows in the selection.
        found: usize,
    },
    /// A negative number of results was requested.
    #[error("result limit must not be negative, got {requested}")]
    InvalidLimit {
        /// The rejected limit.
        requested: i64,
    },
    /// A keyword was empty or whitespace and would match every activity.
    #[error("keyword for category {category} must not be blank")]
    BlankKeyword {
        /// Category the keyword was meant for.
        category: Category,
    },
}
