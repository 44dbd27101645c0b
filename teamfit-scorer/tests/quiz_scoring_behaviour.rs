#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for turning quiz answers into a team profile.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use teamfit_core::{Category, Profile, Quiz, UserSelection};
use teamfit_scorer::{ScoreAggregator, ScoringError};

/// Answers collected so far and the outcome of scoring them.
pub struct QuizContext {
    selection: RefCell<UserSelection>,
    outcome: RefCell<Option<Result<Profile, ScoringError>>>,
}

#[fixture]
/// Build a fresh `QuizContext` for each scenario run.
pub fn context() -> QuizContext {
    QuizContext {
        selection: RefCell::new(UserSelection::unanswered(0)),
        outcome: RefCell::new(None),
    }
}

fn question_index(id: &str) -> usize {
    Quiz::standard()
        .questions()
        .iter()
        .position(|question| question.id == id)
        .expect("question id should exist in the standard quiz")
}

fn scored_profile(context: &QuizContext) -> Profile {
    context
        .outcome
        .borrow()
        .clone()
        .expect("quiz should have been scored")
        .expect("scoring should succeed")
}

#[given("the standard team quiz")]
fn standard_quiz(context: &QuizContext) {
    *context.selection.borrow_mut() = UserSelection::unanswered(Quiz::standard().len());
}

#[given("the team picks answer {option} for question {question}")]
fn pick_answer(context: &QuizContext, option: usize, question: String) {
    let index = question_index(question.trim_matches('"'));
    assert!(
        context.selection.borrow_mut().select(index, option),
        "question row should exist"
    );
}

#[when("the quiz is scored")]
fn score_quiz(context: &QuizContext) {
    let outcome = ScoreAggregator::new(Quiz::standard()).aggregate(&context.selection.borrow());
    *context.outcome.borrow_mut() = Some(outcome);
}

#[when("a selection with {rows} rows is scored")]
fn score_misshapen(context: &QuizContext, rows: usize) {
    let outcome =
        ScoreAggregator::new(Quiz::standard()).aggregate(&UserSelection::unanswered(rows));
    *context.outcome.borrow_mut() = Some(outcome);
}

#[then("the top categories are adventure, creative and team-building")]
fn adventurous_top(context: &QuizContext) {
    assert_eq!(
        scored_profile(context).top_categories,
        [Category::Adventure, Category::Creative, Category::TeamBuilding]
    );
}

#[then("the top categories are adventure, nature and history")]
fn declaration_order_top(context: &QuizContext) {
    assert_eq!(
        scored_profile(context).top_categories,
        [Category::Adventure, Category::Nature, Category::History]
    );
}

#[then("the percentages sum to 100")]
fn percentages_complete(context: &QuizContext) {
    assert_eq!(scored_profile(context).percentages.sum(), 100);
}

#[then("every category scores zero")]
fn all_zero(context: &QuizContext) {
    let profile = scored_profile(context);
    assert!(profile.scores.is_zero());
    assert_eq!(profile.percentages.sum(), 0);
}

#[then("scoring fails with an invalid selection shape")]
fn invalid_shape(context: &QuizContext) {
    let outcome = context.outcome.borrow();
    assert!(
        matches!(
            outcome.as_ref(),
            Some(Err(ScoringError::InvalidSelectionShape { expected: 8, .. }))
        ),
        "expected an invalid selection shape, got {outcome:?}"
    );
}

#[scenario(path = "tests/features/quiz_scoring.feature", index = 0)]
fn adventurous_team_profile(context: QuizContext) {
    let _ = context;
}

#[scenario(path = "tests/features/quiz_scoring.feature", index = 1)]
fn skipped_quiz_profile(context: QuizContext) {
    let _ = context;
}

#[scenario(path = "tests/features/quiz_scoring.feature", index = 2)]
fn misshapen_selection(context: QuizContext) {
    let _ = context;
}
