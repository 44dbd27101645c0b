//! Facade crate for the teamfit quiz scoring and recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline, and
//! exposes the `SQLite` profile store behind a feature flag.

#![forbid(unsafe_code)]

pub use teamfit_core::{
    ActivityEntry, ActivityTagger, AnswerOption, Catalog, CatalogSection, Category,
    MemoryProfileStore, ParseCategoryError, Percentages, Profile, ProfileStore, Quiz, QuizError,
    QuizQuestion, RankedActivity, ScoreVector, SectionRecommendation, SessionId, SessionIdError,
    UserSelection,
};
pub use teamfit_scorer::{
    KeywordTable, KeywordTagger, RelevanceFilter, ResultLimit, ScoreAggregator, ScoringError,
};

#[cfg(feature = "store-sqlite")]
pub use teamfit_core::{SqliteProfileStore, SqliteProfileStoreError};
