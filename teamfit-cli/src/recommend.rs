//! `recommend` command: shortlist catalog activities for a stored profile.
//!
//! Sections the profile cannot rank (no stored profile, a degenerate one, or
//! nothing relevant) fall back to their full, unfiltered activity list and
//! are flagged with `"fallback": true`. A limit of zero always prints empty
//! sections.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use teamfit_core::{
    Catalog, CatalogSection, Category, Profile, ProfileStore, RankedActivity, SessionId,
};
use teamfit_scorer::{DEFAULT_MULTI_MATCH_BONUS, RelevanceFilter, ResultLimit};

use crate::{
    ARG_LIMIT, ARG_MULTI_MATCH_BONUS, ARG_RECOMMEND_CATALOG, ARG_SESSION, ARG_STORE, CliError,
    DEFAULT_STORE_PATH, ENV_RECOMMEND_CATALOG,
    inputs::{load_json, write_json},
    store::{load_profile, open_store, resolve_session},
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank every section of an activity catalog against the \
                 profile remembered for the session. Sections that cannot \
                 be ranked list all of their activities instead.",
    about = "Shortlist activities for a team"
)]
#[ortho_config(prefix = "TEAMFIT")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON activity catalog.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Session whose profile drives the ranking.
    #[arg(long = ARG_SESSION, value_name = "id")]
    #[serde(default)]
    pub(crate) session: Option<String>,
    /// Path to the SQLite profile database.
    #[arg(long = ARG_STORE, value_name = "path")]
    #[serde(default)]
    pub(crate) store: Option<Utf8PathBuf>,
    /// Maximum number of activities per section.
    #[arg(long = ARG_LIMIT, value_name = "count", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) limit: Option<i64>,
    /// Bonus per matched category for activities matching several.
    #[arg(long = ARG_MULTI_MATCH_BONUS, value_name = "points")]
    #[serde(default)]
    pub(crate) multi_match_bonus: Option<u32>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) session: SessionId,
    pub(crate) store: Utf8PathBuf,
    pub(crate) limit: ResultLimit,
    pub(crate) multi_match_bonus: u32,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        let limit = args
            .limit
            .map(ResultLimit::try_from)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            catalog,
            session: resolve_session(args.session)?,
            store: args
                .store
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STORE_PATH)),
            limit,
            multi_match_bonus: args.multi_match_bonus.unwrap_or(DEFAULT_MULTI_MATCH_BONUS),
        })
    }
}

/// JSON document printed by `recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendationReport {
    pub(crate) session: String,
    /// Empty when the session has no stored profile.
    pub(crate) top_categories: Vec<Category>,
    pub(crate) sections: Vec<SectionReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SectionReport {
    pub(crate) section: String,
    pub(crate) fallback: bool,
    pub(crate) activities: Vec<ActivityReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActivityReport {
    pub(crate) index: usize,
    pub(crate) text: String,
    /// Absent for fallback entries, which were not ranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) relevance: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) matched_categories: Vec<Category>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = open_store(&config.store)?;
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(&config, &store, &mut stdout)
}

pub(crate) fn run_recommend_with<S: ProfileStore>(
    config: &RecommendConfig,
    store: &S,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog: Catalog = load_json(&config.catalog, ARG_RECOMMEND_CATALOG)?;
    let profile = load_profile(store, &config.session)?;
    let report = build_report(config, &catalog, profile.as_ref());
    write_json(writer, &report)
}

fn build_report(
    config: &RecommendConfig,
    catalog: &Catalog,
    profile: Option<&Profile>,
) -> RecommendationReport {
    let filter = RelevanceFilter::default().with_multi_match_bonus(config.multi_match_bonus);
    let sections = catalog
        .sections
        .iter()
        .map(|section| {
            let ranked = profile
                .map(|found| filter.filter_section(section, found, config.limit))
                .unwrap_or_default();
            if ranked.is_empty() && config.limit.get() > 0 {
                log::debug!("section {:?} falls back to the full list", section.name);
                fallback_section(section)
            } else {
                ranked_section(section, ranked)
            }
        })
        .collect();
    RecommendationReport {
        session: config.session.to_string(),
        top_categories: profile
            .map(|found| found.top_categories.clone())
            .unwrap_or_default(),
        sections,
    }
}

fn ranked_section(section: &CatalogSection, ranked: Vec<RankedActivity>) -> SectionReport {
    let activities = ranked
        .into_iter()
        .map(|activity| ActivityReport {
            index: activity.index,
            text: section
                .activity(activity.index)
                .unwrap_or_default()
                .to_owned(),
            relevance: Some(activity.relevance),
            matched_categories: activity.matched_categories,
        })
        .collect();
    SectionReport {
        section: section.name.clone(),
        fallback: false,
        activities,
    }
}

fn fallback_section(section: &CatalogSection) -> SectionReport {
    let activities = section
        .entries()
        .map(|entry| ActivityReport {
            index: entry.index,
            text: entry.text.to_owned(),
            relevance: None,
            matched_categories: Vec::new(),
        })
        .collect();
    SectionReport {
        section: section.name.clone(),
        fallback: true,
        activities,
    }
}
