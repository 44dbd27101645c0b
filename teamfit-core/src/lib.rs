//! Core domain types for the teamfit engine.
//!
//! The crate defines the closed [`Category`] taxonomy, score tables, the quiz
//! a team answers, the [`Profile`] derived from those answers, the activity
//! catalog that profiles are matched against, and the [`ProfileStore`]
//! boundary used to remember profiles between visits.
//!
//! Scoring and ranking live in `teamfit-scorer`; this crate only models the
//! data and validates it on construction.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activity;
pub mod category;
pub mod profile;
pub mod quiz;
pub mod score;
pub mod store;
pub mod tagger;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use activity::{ActivityEntry, Catalog, CatalogSection, RankedActivity, SectionRecommendation};
pub use category::{Category, ParseCategoryError};
pub use profile::{DEFAULT_TOP_K, Profile};
pub use quiz::{AnswerOption, Quiz, QuizError, QuizQuestion, UserSelection};
pub use score::{Percentages, ScoreVector};
pub use store::{MemoryProfileStore, ProfileStore, SessionId, SessionIdError};
pub use tagger::ActivityTagger;

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteProfileStore, SqliteProfileStoreError};
