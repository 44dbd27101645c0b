#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for shortlisting activities against a team profile.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use teamfit_core::{
    Catalog, Category, Profile, Quiz, RankedActivity, UserSelection,
    test_support::{SAMPLE_SECTION, adventurous_selection, empty_selection, sample_catalog},
};
use teamfit_scorer::{RelevanceFilter, ResultLimit, ScoreAggregator, ScoringError};

/// Profile, catalog and the shortlist produced from them.
pub struct RecommendationContext {
    profile: RefCell<Option<Profile>>,
    catalog: RefCell<Catalog>,
    shortlist: RefCell<Option<Result<Vec<RankedActivity>, ScoringError>>>,
}

#[fixture]
/// Build a fresh `RecommendationContext` for each scenario run.
pub fn context() -> RecommendationContext {
    RecommendationContext {
        profile: RefCell::new(None),
        catalog: RefCell::new(Catalog::default()),
        shortlist: RefCell::new(None),
    }
}

fn profile_for(selection: &UserSelection) -> Profile {
    ScoreAggregator::new(Quiz::standard())
        .aggregate(selection)
        .expect("standard selection should score")
}

fn recommend(context: &RecommendationContext, requested: i64) {
    let outcome = ResultLimit::try_from(requested).map(|limit| {
        let profile = context.profile.borrow();
        let profile = profile.as_ref().expect("profile must be initialised");
        let catalog = context.catalog.borrow();
        let section = catalog
            .section(SAMPLE_SECTION)
            .expect("sample section should exist");
        RelevanceFilter::default().filter_section(section, profile, limit)
    });
    *context.shortlist.borrow_mut() = Some(outcome);
}

fn shortlist(context: &RecommendationContext) -> Vec<RankedActivity> {
    context
        .shortlist
        .borrow()
        .clone()
        .expect("activities should have been requested")
        .expect("recommendation should succeed")
}

#[given("an adventurous team profile")]
fn adventurous_profile(context: &RecommendationContext) {
    *context.profile.borrow_mut() = Some(profile_for(&adventurous_selection()));
}

#[given("a team profile from an unanswered quiz")]
fn unanswered_profile(context: &RecommendationContext) {
    *context.profile.borrow_mut() = Some(profile_for(&empty_selection()));
}

#[given("the sample activity catalog")]
fn sample_activities(context: &RecommendationContext) {
    *context.catalog.borrow_mut() = sample_catalog();
}

#[when("{limit} activities are recommended")]
fn activities_recommended(context: &RecommendationContext, limit: i64) {
    recommend(context, limit);
}

#[when("{limit} activities are requested")]
fn activities_requested(context: &RecommendationContext, limit: i64) {
    recommend(context, limit);
}

#[then("the shortlist is activities 1, 28, 10 and 15")]
fn expected_top_four(context: &RecommendationContext) {
    let indices: Vec<usize> = shortlist(context)
        .iter()
        .map(|activity| activity.index)
        .collect();
    assert_eq!(indices, [1, 28, 10, 15]);
}

#[then("the first shortlisted activity matches adventure and team-building")]
fn first_matches(context: &RecommendationContext) {
    let activities = shortlist(context);
    let first = activities.first().expect("shortlist should not be empty");
    assert_eq!(
        first.matched_categories,
        [Category::Adventure, Category::TeamBuilding]
    );
}

#[then("the shortlist is empty")]
fn empty_shortlist(context: &RecommendationContext) {
    assert!(shortlist(context).is_empty());
}

#[then("the shortlist holds {count} activities")]
fn shortlist_size(context: &RecommendationContext, count: usize) {
    assert_eq!(shortlist(context).len(), count);
}

#[then("every shortlisted activity has positive relevance")]
fn positive_relevance(context: &RecommendationContext) {
    assert!(
        shortlist(context)
            .iter()
            .all(|activity| activity.relevance > 0)
    );
}

#[then("the request fails with an invalid limit")]
fn invalid_limit(context: &RecommendationContext) {
    let outcome = context.shortlist.borrow();
    assert_eq!(
        outcome.as_ref().and_then(|result| result.as_ref().err()),
        Some(&ScoringError::InvalidLimit { requested: -1 })
    );
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn four_most_relevant(context: RecommendationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn skipped_quiz_gets_nothing(context: RecommendationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn generous_limit_not_padded(context: RecommendationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 3)]
fn negative_limit_rejected(context: RecommendationContext) {
    let _ = context;
}
