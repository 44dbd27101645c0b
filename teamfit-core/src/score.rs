//! Per-category score tables.
//!
//! [`ScoreVector`] always holds a value for every [`Category`]; categories a
//! caller never mentions read as `0`. Scores are unsigned so the vector can
//! never go negative, and additions saturate instead of wrapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Category;

/// Non-negative integer score for every category.
///
/// Serialises as a JSON object keyed by category name. Deserialising a
/// partial object fills the missing categories with `0`, which is how quiz
/// answers declare the handful of categories they affect.
///
/// # Examples
/// ```
/// use teamfit_core::{Category, ScoreVector};
///
/// let mut scores = ScoreVector::zero().with_score(Category::Nature, 2);
/// scores.add(Category::Nature, 1);
/// assert_eq!(scores.get(Category::Nature), 3);
/// assert_eq!(scores.get(Category::Sports), 0);
/// assert_eq!(scores.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Category, u32>",
    into = "BTreeMap<Category, u32>"
)]
pub struct ScoreVector {
    scores: [u32; Category::COUNT],
}

impl ScoreVector {
    /// A vector with every category at zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            scores: [0; Category::COUNT],
        }
    }

    /// Score recorded for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.scores
            .get(category.index())
            .copied()
            .unwrap_or_default()
    }

    /// Overwrite the score for `category`.
    pub fn set(&mut self, category: Category, score: u32) {
        if let Some(slot) = self.scores.get_mut(category.index()) {
            *slot = score;
        }
    }

    /// Add `points` to `category`, saturating at `u32::MAX`.
    pub fn add(&mut self, category: Category, points: u32) {
        if let Some(slot) = self.scores.get_mut(category.index()) {
            *slot = slot.saturating_add(points);
        }
    }

    /// Set a score while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_score(mut self, category: Category, score: u32) -> Self {
        self.set(category, score);
        self
    }

    /// Add every category of `other` into `self`.
    pub fn accumulate(&mut self, other: &Self) {
        for (slot, points) in self.scores.iter_mut().zip(other.scores) {
            *slot = slot.saturating_add(points);
        }
    }

    /// Lower every score above `ceiling` to `ceiling`.
    pub fn cap(&mut self, ceiling: u32) {
        for slot in &mut self.scores {
            *slot = (*slot).min(ceiling);
        }
    }

    /// Sum of all category scores.
    ///
    /// Widened to `u64` so eight saturated categories cannot overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.scores.iter().map(|&score| u64::from(score)).sum()
    }

    /// Report whether every category scores zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|&score| score == 0)
    }

    /// Iterate over `(category, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().zip(self.scores.iter().copied())
    }
}

impl FromIterator<(Category, u32)> for ScoreVector {
    /// Sum the supplied pairs; repeated categories accumulate.
    fn from_iter<I: IntoIterator<Item = (Category, u32)>>(iter: I) -> Self {
        let mut scores = Self::zero();
        for (category, points) in iter {
            scores.add(category, points);
        }
        scores
    }
}

impl From<BTreeMap<Category, u32>> for ScoreVector {
    fn from(map: BTreeMap<Category, u32>) -> Self {
        map.into_iter().collect()
    }
}

impl From<ScoreVector> for BTreeMap<Category, u32> {
    fn from(scores: ScoreVector) -> Self {
        scores.iter().collect()
    }
}

/// Integer share of the total score held by each category.
///
/// Every value lies in `0..=100`. When the underlying total is positive the
/// values sum to exactly `100`; otherwise they are all `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Category, u8>", into = "BTreeMap<Category, u8>")]
pub struct Percentages {
    values: [u8; Category::COUNT],
}

impl Percentages {
    /// All categories at zero percent.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            values: [0; Category::COUNT],
        }
    }

    /// Percentage recorded for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> u8 {
        self.values
            .get(category.index())
            .copied()
            .unwrap_or_default()
    }

    /// Overwrite the percentage for `category`, clamping to `100`.
    pub fn set(&mut self, category: Category, value: u8) {
        if let Some(slot) = self.values.get_mut(category.index()) {
            *slot = value.min(100);
        }
    }

    /// Sum of all percentages.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.values.iter().map(|&value| u32::from(value)).sum()
    }

    /// Iterate over `(category, percentage)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.into_iter().zip(self.values.iter().copied())
    }
}

impl From<BTreeMap<Category, u8>> for Percentages {
    fn from(map: BTreeMap<Category, u8>) -> Self {
        let mut percentages = Self::zero();
        for (category, value) in map {
            percentages.set(category, value);
        }
        percentages
    }
}

impl From<Percentages> for BTreeMap<Category, u8> {
    fn from(percentages: Percentages) -> Self {
        percentages.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_vector_is_fully_populated() {
        let scores = ScoreVector::zero();
        assert_eq!(scores.iter().count(), Category::COUNT);
        assert!(scores.is_zero());
        assert_eq!(scores.total(), 0);
    }

    #[rstest]
    fn accumulate_adds_per_category() {
        let mut total = ScoreVector::zero().with_score(Category::Adventure, 2);
        let other = ScoreVector::zero()
            .with_score(Category::Adventure, 1)
            .with_score(Category::Wellness, 3);
        total.accumulate(&other);
        assert_eq!(total.get(Category::Adventure), 3);
        assert_eq!(total.get(Category::Wellness), 3);
        assert_eq!(total.total(), 6);
    }

    #[rstest]
    fn additions_saturate() {
        let mut scores = ScoreVector::zero().with_score(Category::Sports, u32::MAX);
        scores.add(Category::Sports, 10);
        assert_eq!(scores.get(Category::Sports), u32::MAX);
    }

    #[rstest]
    fn cap_limits_every_category() {
        let mut scores = ScoreVector::zero()
            .with_score(Category::History, 9)
            .with_score(Category::Culinary, 2);
        scores.cap(5);
        assert_eq!(scores.get(Category::History), 5);
        assert_eq!(scores.get(Category::Culinary), 2);
    }

    #[rstest]
    fn partial_json_fills_missing_categories() {
        let scores: ScoreVector =
            serde_json::from_str(r#"{"nature":2,"team-building":1}"#).unwrap();
        assert_eq!(scores.get(Category::Nature), 2);
        assert_eq!(scores.get(Category::TeamBuilding), 1);
        assert_eq!(scores.get(Category::Adventure), 0);
    }

    #[rstest]
    fn serialised_vector_lists_every_category() {
        let json = serde_json::to_value(ScoreVector::zero().with_score(Category::Creative, 4))
            .unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), Category::COUNT);
        assert_eq!(object.get("creative"), Some(&serde_json::json!(4)));
    }

    #[rstest]
    fn percentages_clamp_to_one_hundred() {
        let mut percentages = Percentages::zero();
        percentages.set(Category::Nature, 250);
        assert_eq!(percentages.get(Category::Nature), 100);
        assert_eq!(percentages.sum(), 100);
    }
}
