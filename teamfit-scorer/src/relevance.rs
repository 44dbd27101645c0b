//! Rank catalog activities against a team profile.
//!
//! Each activity is tagged, then credited for every top category it evokes:
//! `dna score * weight`, where the weight falls linearly from `K` for the
//! first top category to `1` for the last. Activities matching more than one
//! top category earn a bonus per matched category. Activities with zero
//! relevance are dropped, never merely ranked last.
//!
//! An empty result is a signal, not a failure: when the profile is
//! degenerate or nothing matches, the caller decides whether to show the
//! unfiltered catalog instead.

#![forbid(unsafe_code)]

use log::debug;
use teamfit_core::{
    ActivityEntry, ActivityTagger, Catalog, CatalogSection, Category, Profile, RankedActivity,
    SectionRecommendation,
};

use crate::{KeywordTagger, ScoringError};

/// Bonus per matched category for activities matching several top categories.
pub const DEFAULT_MULTI_MATCH_BONUS: u32 = 2;

/// Number of activities returned when a caller does not choose.
pub const DEFAULT_RESULT_LIMIT: usize = 4;

/// Maximum number of activities a filter call may return.
///
/// Build from a signed value with [`ResultLimit::try_from`] to reject
/// negative requests instead of silently clamping them.
///
/// # Examples
/// ```
/// use teamfit_scorer::{ResultLimit, ScoringError};
///
/// assert_eq!(ResultLimit::try_from(10_i64).map(ResultLimit::get), Ok(10));
/// assert_eq!(
///     ResultLimit::try_from(-1_i64),
///     Err(ScoringError::InvalidLimit { requested: -1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultLimit(usize);

impl ResultLimit {
    /// Wrap a non-negative limit.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    /// The wrapped limit.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        Self(DEFAULT_RESULT_LIMIT)
    }
}

impl From<usize> for ResultLimit {
    fn from(limit: usize) -> Self {
        Self(limit)
    }
}

impl TryFrom<i64> for ResultLimit {
    type Error = ScoringError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        usize::try_from(requested)
            .map(Self)
            .map_err(|_| ScoringError::InvalidLimit { requested })
    }
}

/// Ranks activities by relevance to a profile's top categories.
///
/// # Examples
/// ```
/// use teamfit_core::{CatalogSection, Category, Percentages, Profile, ScoreVector};
/// use teamfit_scorer::{RelevanceFilter, ResultLimit};
///
/// let profile = Profile {
///     scores: ScoreVector::zero()
///         .with_score(Category::Culinary, 4)
///         .with_score(Category::History, 2),
///     percentages: Percentages::zero(),
///     top_categories: vec![Category::Culinary, Category::History],
/// };
/// let section = CatalogSection::new(
///     "Evenings",
///     ["Bowling night", "Castle banquet dinner", "Wine tasting"],
/// );
/// let ranked = RelevanceFilter::default().filter_section(&section, &profile, ResultLimit::new(5));
/// let order: Vec<usize> = ranked.iter().map(|activity| activity.index).collect();
/// assert_eq!(order, [1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct RelevanceFilter<T = KeywordTagger> {
    tagger: T,
    multi_match_bonus: u32,
}

impl Default for RelevanceFilter<KeywordTagger> {
    fn default() -> Self {
        Self::with_tagger(KeywordTagger::default())
    }
}

impl<T: ActivityTagger> RelevanceFilter<T> {
    /// Build a filter around `tagger` with the default multi-match bonus.
    #[must_use]
    pub const fn with_tagger(tagger: T) -> Self {
        Self {
            tagger,
            multi_match_bonus: DEFAULT_MULTI_MATCH_BONUS,
        }
    }

    /// Replace the per-category multi-match bonus.
    #[must_use]
    pub const fn with_multi_match_bonus(mut self, bonus: u32) -> Self {
        self.multi_match_bonus = bonus;
        self
    }

    /// Score a single activity without filtering it.
    ///
    /// The returned relevance is `0` when the activity evokes none of the
    /// profile's scoring top categories.
    #[must_use]
    pub fn score(&self, entry: ActivityEntry<'_>, profile: &Profile) -> RankedActivity {
        let dna = self.tagger.tag(entry.text);
        let weights = PriorityWeights::for_profile(profile);
        let mut relevance = 0_u32;
        let mut matched_categories = Vec::new();
        for (category, weight) in weights.iter() {
            let evoked = dna.get(category);
            if evoked == 0 {
                continue;
            }
            relevance = relevance.saturating_add(evoked.saturating_mul(weight));
            matched_categories.push(category);
        }
        if matched_categories.len() > 1 {
            let matched = u32::try_from(matched_categories.len()).unwrap_or(u32::MAX);
            relevance = relevance.saturating_add(self.multi_match_bonus.saturating_mul(matched));
        }
        RankedActivity {
            index: entry.index,
            relevance,
            matched_categories,
        }
    }

    /// Return up to `limit` relevant activities, most relevant first.
    ///
    /// Ties keep catalog order. Activities with zero relevance are
    /// excluded, so fewer than `limit` results (possibly none) may come
    /// back. A degenerate profile always yields an empty result.
    pub fn filter<'a, I>(&self, entries: I, profile: &Profile, limit: ResultLimit) -> Vec<RankedActivity>
    where
        I: IntoIterator<Item = ActivityEntry<'a>>,
    {
        if profile.is_degenerate() {
            debug!("profile has no scoring top categories; nothing is relevant");
            return Vec::new();
        }
        let mut ranked: Vec<RankedActivity> = entries
            .into_iter()
            .map(|entry| self.score(entry, profile))
            .filter(|activity| activity.relevance > 0)
            .collect();
        ranked.sort_by(|left, right| {
            right
                .relevance
                .cmp(&left.relevance)
                .then(left.index.cmp(&right.index))
        });
        ranked.truncate(limit.get());
        ranked
    }

    /// [`RelevanceFilter::filter`] over every entry of `section`.
    pub fn filter_section(
        &self,
        section: &CatalogSection,
        profile: &Profile,
        limit: ResultLimit,
    ) -> Vec<RankedActivity> {
        self.filter(section.entries(), profile, limit)
    }

    /// Filter every section of `catalog`, preserving section order.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        profile: &Profile,
        limit: ResultLimit,
    ) -> Vec<SectionRecommendation> {
        catalog
            .sections
            .iter()
            .map(|section| SectionRecommendation {
                section: section.name.clone(),
                activities: self.filter_section(section, profile, limit),
            })
            .collect()
    }
}

/// Weight of each scoring top category, most important first.
///
/// Top categories the team scored zero in carry no weight and are skipped;
/// they only occupy a rank so that `K` stays stable.
struct PriorityWeights {
    weights: Vec<(Category, u32)>,
}

impl PriorityWeights {
    fn for_profile(profile: &Profile) -> Self {
        let rank_count = profile.top_categories.len();
        let mut weights: Vec<(Category, u32)> = Vec::with_capacity(rank_count);
        for (priority, &category) in profile.top_categories.iter().enumerate() {
            if profile.scores.get(category) == 0
                || weights.iter().any(|&(seen, _)| seen == category)
            {
                continue;
            }
            let weight = u32::try_from(rank_count.saturating_sub(priority)).unwrap_or(u32::MAX);
            weights.push((category, weight));
        }
        Self { weights }
    }

    fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.weights.iter().copied()
    }
}
