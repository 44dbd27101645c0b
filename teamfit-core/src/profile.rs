//! Team profiles derived from a completed quiz.
//!
//! A profile is the only quiz artefact that outlives the session: the raw
//! selection is discarded once its scores have been aggregated here.

use serde::{Deserialize, Serialize};

use crate::{Category, Percentages, ScoreVector};

/// Number of top categories kept unless a caller asks otherwise.
pub const DEFAULT_TOP_K: usize = 3;

/// Aggregate quiz result for a team.
///
/// `top_categories` is ordered most important first and always holds
/// `min(K, Category::COUNT)` entries, even when every score is zero.
///
/// # Examples
/// ```
/// use teamfit_core::{Category, Percentages, Profile, ScoreVector};
///
/// let profile = Profile {
///     scores: ScoreVector::zero().with_score(Category::Nature, 4),
///     percentages: Percentages::zero(),
///     top_categories: vec![Category::Nature, Category::Adventure],
/// };
/// assert_eq!(profile.priority(Category::Adventure), Some(1));
/// assert!(!profile.is_degenerate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Aggregate score per category.
    pub scores: ScoreVector,
    /// Share of the total held by each category.
    pub percentages: Percentages,
    /// Highest-scoring categories, most important first.
    pub top_categories: Vec<Category>,
}

impl Profile {
    /// Sum of the aggregate scores.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.scores.total()
    }

    /// Rank of `category` within `top_categories`, starting at `0`.
    #[must_use]
    pub fn priority(&self, category: Category) -> Option<usize> {
        self.top_categories
            .iter()
            .position(|&candidate| candidate == category)
    }

    /// Report whether the profile carries no usable preference.
    ///
    /// True when no category scored or no top categories were kept. Activity
    /// filtering yields nothing for such profiles.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.top_categories.is_empty() || self.scores.is_zero()
    }
}
