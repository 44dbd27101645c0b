//! Reduce quiz answers into a team [`Profile`].
//!
//! The aggregator sums the partial score vectors of every ticked option,
//! derives integer percentages, and ranks categories by score. Ranking is a
//! stable sort over [`Category::ALL`], so ties always resolve in declaration
//! order and identical answers always yield identical profiles.

#![forbid(unsafe_code)]

use std::cmp::Reverse;

use log::debug;
use teamfit_core::{
    Category, DEFAULT_TOP_K, Percentages, Profile, Quiz, ScoreVector, UserSelection,
};

use crate::ScoringError;

/// Turns a [`UserSelection`] for a [`Quiz`] into a [`Profile`].
///
/// # Examples
/// ```
/// use teamfit_core::{Category, Quiz, UserSelection};
/// use teamfit_scorer::ScoreAggregator;
///
/// # fn main() -> Result<(), teamfit_scorer::ScoringError> {
/// let aggregator = ScoreAggregator::new(Quiz::standard());
/// let selection = UserSelection::new([
///     vec![2], vec![], vec![3], vec![], vec![], vec![], vec![], vec![2],
/// ]);
/// let profile = aggregator.aggregate(&selection)?;
/// assert_eq!(profile.top_categories.first(), Some(&Category::Wellness));
/// assert_eq!(profile.percentages.get(Category::Wellness), 100);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator<'q> {
    quiz: &'q Quiz,
    top_k: usize,
}

impl<'q> ScoreAggregator<'q> {
    /// Aggregate against `quiz`, keeping [`DEFAULT_TOP_K`] top categories.
    #[must_use]
    pub const fn new(quiz: &'q Quiz) -> Self {
        Self {
            quiz,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Keep `top_k` top categories instead of the default.
    ///
    /// Values above [`Category::COUNT`] keep every category.
    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Number of top categories a profile will carry.
    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k.min(Category::COUNT)
    }

    /// Score a completed quiz.
    ///
    /// Option indices that do not exist for their question are ignored, as
    /// are empty rows.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidSelectionShape`] when the selection
    /// does not have exactly one row per question.
    pub fn aggregate(&self, selection: &UserSelection) -> Result<Profile, ScoringError> {
        let scores = self.sum_selected(selection)?;
        Ok(self.profile_from_scores(scores))
    }

    /// Sum the partial score vectors of every selected option.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidSelectionShape`] when the selection
    /// does not have exactly one row per question.
    pub fn sum_selected(&self, selection: &UserSelection) -> Result<ScoreVector, ScoringError> {
        if selection.len() != self.quiz.len() {
            return Err(ScoringError::InvalidSelectionShape {
                expected: self.quiz.len(),
                found: selection.len(),
            });
        }
        let mut scores = ScoreVector::zero();
        for (question, options) in selection.rows() {
            for &option in options {
                match self.quiz.option(question, option) {
                    Some(answer) => scores.accumulate(&answer.scores),
                    None => debug!("ignoring unknown option {option} for question {question}"),
                }
            }
        }
        Ok(scores)
    }

    /// Derive percentages and top categories from aggregate scores.
    ///
    /// Recomputing a profile from its own `scores` reproduces it exactly.
    #[must_use]
    pub fn profile_from_scores(&self, scores: ScoreVector) -> Profile {
        let mut top_categories = rank_categories(&scores);
        top_categories.truncate(self.top_k());
        Profile {
            percentages: percentages(&scores),
            scores,
            top_categories,
        }
    }
}

/// Every category ordered by descending score, ties in declaration order.
#[must_use]
pub fn rank_categories(scores: &ScoreVector) -> Vec<Category> {
    let mut ranked = Category::ALL.to_vec();
    ranked.sort_by_key(|&category| Reverse(scores.get(category)));
    ranked
}

/// Integer share of the total held by each category.
///
/// Each category receives the floor of its exact share, then the points
/// still missing from `100` go to the largest remainders (ties in
/// declaration order). Every value is therefore within one point of
/// `100 * score / total` and the values sum to exactly `100`. A zero total
/// yields all zeros.
///
/// This departs from rounding each share on its own, which can make the
/// values sum to more or less than `100`; a single category may therefore
/// read one point above or below its rounded share.
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "largest-remainder apportionment works on integer quotients"
)]
pub fn percentages(scores: &ScoreVector) -> Percentages {
    let mut shares = Percentages::zero();
    let total = scores.total();
    if total == 0 {
        return shares;
    }

    let mut assigned = 0_u64;
    let mut remainders = Vec::with_capacity(Category::COUNT);
    for (category, score) in scores.iter() {
        let scaled = u64::from(score) * 100;
        let floor = scaled / total;
        assigned += floor;
        shares.set(category, u8::try_from(floor).unwrap_or(100));
        remainders.push((category, scaled % total));
    }

    remainders.sort_by_key(|&(_, remainder)| Reverse(remainder));
    let missing = usize::try_from(100_u64.saturating_sub(assigned)).unwrap_or_default();
    for (category, _) in remainders.into_iter().take(missing) {
        shares.set(category, shares.get(category).saturating_add(1));
    }
    shares
}

#[cfg(test)]
mod tests {
    //! Unit coverage for quiz aggregation.

    use rstest::{fixture, rstest};
    use teamfit_core::{
        AnswerOption, Category, Quiz, QuizQuestion, ScoreVector, UserSelection,
        test_support::{adventurous_selection, empty_selection},
    };

    use super::{ScoreAggregator, percentages, rank_categories};
    use crate::ScoringError;

    #[fixture]
    fn aggregator() -> ScoreAggregator<'static> {
        ScoreAggregator::new(Quiz::standard())
    }

    #[rstest]
    fn adventurous_selection_profile(aggregator: ScoreAggregator<'static>) {
        let profile = aggregator.aggregate(&adventurous_selection()).unwrap();

        let expected = ScoreVector::zero()
            .with_score(Category::Adventure, 3)
            .with_score(Category::Nature, 1)
            .with_score(Category::Culinary, 1)
            .with_score(Category::Sports, 1)
            .with_score(Category::Creative, 3)
            .with_score(Category::TeamBuilding, 3);
        assert_eq!(profile.scores, expected);
        assert_eq!(
            profile.top_categories,
            [Category::Adventure, Category::Creative, Category::TeamBuilding]
        );
        assert_eq!(profile.percentages.get(Category::Adventure), 25);
        assert_eq!(profile.percentages.get(Category::Creative), 25);
        assert_eq!(profile.percentages.get(Category::TeamBuilding), 25);
        assert_eq!(profile.percentages.get(Category::Nature), 9);
        assert_eq!(profile.percentages.get(Category::Culinary), 8);
        assert_eq!(profile.percentages.get(Category::Sports), 8);
        assert_eq!(profile.percentages.get(Category::History), 0);
        assert_eq!(profile.percentages.sum(), 100);
    }

    #[rstest]
    fn equal_shares_still_sum_to_one_hundred() {
        let scores = Category::ALL
            .iter()
            .fold(ScoreVector::zero(), |acc, &category| acc.with_score(category, 1));
        let shares = percentages(&scores);
        // Rounding 12.5 on its own would give 13 each and a sum of 104.
        assert_eq!(shares.sum(), 100);
        assert_eq!(shares.get(Category::Adventure), 13);
        assert_eq!(shares.get(Category::TeamBuilding), 12);
    }

    #[rstest]
    fn empty_selection_yields_declaration_order(aggregator: ScoreAggregator<'static>) {
        let profile = aggregator.aggregate(&empty_selection()).unwrap();
        assert!(profile.scores.is_zero());
        assert_eq!(profile.percentages.sum(), 0);
        assert_eq!(
            profile.top_categories,
            [Category::Adventure, Category::Nature, Category::History]
        );
    }

    #[rstest]
    #[case(7)]
    #[case(9)]
    #[case(0)]
    fn wrong_row_count_is_rejected(aggregator: ScoreAggregator<'static>, #[case] rows: usize) {
        let err = aggregator
            .aggregate(&UserSelection::unanswered(rows))
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidSelectionShape {
                expected: 8,
                found: rows
            }
        );
    }

    #[rstest]
    fn unknown_options_are_ignored(aggregator: ScoreAggregator<'static>) {
        let mut selection = empty_selection();
        selection.select(0, 2);
        selection.select(0, 42);
        let profile = aggregator.aggregate(&selection).unwrap();
        assert_eq!(profile.scores.total(), 3);
        assert_eq!(profile.scores.get(Category::Wellness), 3);
    }

    #[rstest]
    fn multi_select_rows_accumulate(aggregator: ScoreAggregator<'static>) {
        let mut selection = empty_selection();
        selection.select(6, 0);
        selection.select(6, 1);
        selection.select(6, 2);
        let profile = aggregator.aggregate(&selection).unwrap();
        assert_eq!(profile.scores.total(), 9);
        assert_eq!(
            profile.top_categories,
            [Category::Nature, Category::History, Category::Culinary]
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(5, 5)]
    #[case(20, 8)]
    fn top_k_is_bounded_by_category_count(#[case] requested: usize, #[case] kept: usize) {
        let aggregator = ScoreAggregator::new(Quiz::standard()).with_top_k(requested);
        let profile = aggregator.aggregate(&adventurous_selection()).unwrap();
        assert_eq!(profile.top_categories.len(), kept);
    }

    #[rstest]
    fn recomputing_from_scores_is_idempotent(aggregator: ScoreAggregator<'static>) {
        let profile = aggregator.aggregate(&adventurous_selection()).unwrap();
        assert_eq!(aggregator.profile_from_scores(profile.scores), profile);
    }

    #[rstest]
    fn custom_quiz_shapes_are_respected() {
        let quiz = Quiz::new(vec![QuizQuestion {
            id: "only".to_owned(),
            prompt: "Pick one".to_owned(),
            options: vec![AnswerOption::new("Spa", [(Category::Wellness, 2)])],
        }])
        .unwrap();
        let aggregator = ScoreAggregator::new(&quiz);
        let profile = aggregator.aggregate(&UserSelection::new([[0]])).unwrap();
        assert_eq!(profile.top_categories.first(), Some(&Category::Wellness));
    }

    #[rstest]
    fn thirds_apportion_to_one_hundred() {
        let scores = ScoreVector::zero()
            .with_score(Category::History, 1)
            .with_score(Category::Sports, 1)
            .with_score(Category::Wellness, 1);
        let shares = percentages(&scores);
        assert_eq!(shares.get(Category::History), 34);
        assert_eq!(shares.get(Category::Sports), 33);
        assert_eq!(shares.get(Category::Wellness), 33);
    }

    #[rstest]
    fn ranking_is_stable_under_ties() {
        let scores = ScoreVector::zero()
            .with_score(Category::TeamBuilding, 2)
            .with_score(Category::Nature, 2)
            .with_score(Category::Culinary, 5);
        let ranked = rank_categories(&scores);
        assert_eq!(
            ranked.get(..4),
            Some(
                [
                    Category::Culinary,
                    Category::Nature,
                    Category::TeamBuilding,
                    Category::Adventure
                ]
                .as_slice()
            )
        );
    }
}
