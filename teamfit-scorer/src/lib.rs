//! Quiz scoring and activity recommendation for teamfit.
//!
//! The crate provides the three request-time stages that turn quiz answers
//! into a shortlist of activities:
//! - **Aggregation** sums the partial score vectors of every selected answer
//!   into a [`Profile`](teamfit_core::Profile) with integer percentages and
//!   the team's top categories ([`ScoreAggregator`]).
//! - **Tagging** derives the "activity DNA" of a free-text description from
//!   a declarative keyword table ([`KeywordTagger`]).
//! - **Relevance filtering** weights each activity's DNA by the profile's
//!   category priorities, rewards multi-category matches, and keeps the top
//!   `N` ([`RelevanceFilter`]).
//!
//! # Examples
//!
//! ```
//! use teamfit_core::{CatalogSection, Quiz, UserSelection};
//! use teamfit_scorer::{RelevanceFilter, ResultLimit, ScoreAggregator};
//!
//! # fn main() -> Result<(), teamfit_scorer::ScoringError> {
//! let selection = UserSelection::new([
//!     vec![0], vec![3], vec![], vec![0], vec![1], vec![], vec![], vec![],
//! ]);
//! let profile = ScoreAggregator::new(Quiz::standard()).aggregate(&selection)?;
//!
//! let section = CatalogSection::new(
//!     "Day trips",
//!     ["Wine tasting", "Canyon hike with a group picnic"],
//! );
//! let ranked = RelevanceFilter::default().filter_section(
//!     &section,
//!     &profile,
//!     ResultLimit::try_from(4_i64)?,
//! );
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].index, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregator;
mod error;
mod relevance;
mod tagger;

pub use aggregator::{ScoreAggregator, percentages, rank_categories};
pub use error::ScoringError;
pub use relevance::{DEFAULT_MULTI_MATCH_BONUS, DEFAULT_RESULT_LIMIT, RelevanceFilter, ResultLimit};
pub use tagger::{DEFAULT_KEYWORD_CAP, KeywordTable, KeywordTagger};
