//! Interest categories used to profile a team and tag activities.
//!
//! The set is closed: every score vector, percentage table and keyword
//! table is keyed by exactly these eight members. Declaration order is
//! significant because it breaks ties when categories are ranked.
//!
//! # Examples
//! ```
//! use teamfit_core::Category;
//!
//! assert_eq!(Category::History.as_str(), "history");
//! assert_eq!(Category::TeamBuilding.to_string(), "team-building");
//! assert_eq!(Category::ALL.first(), Some(&Category::Adventure));
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A member of the fixed interest taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Outdoor thrills such as climbing, rafting and trekking.
    Adventure,
    /// Landscapes, parks, wildlife and the outdoors at a gentler pace.
    Nature,
    /// Museums, heritage sites and guided historical tours.
    History,
    /// Cooking classes, tastings and food experiences.
    Culinary,
    /// Competitive and recreational sport.
    Sports,
    /// Arts, crafts, music and other making activities.
    Creative,
    /// Relaxation, spa and mindfulness.
    Wellness,
    /// Cooperative challenges designed around the group.
    TeamBuilding,
}

impl Category {
    /// Number of categories in the taxonomy.
    pub const COUNT: usize = 8;

    /// Every category in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Adventure,
        Self::Nature,
        Self::History,
        Self::Culinary,
        Self::Sports,
        Self::Creative,
        Self::Wellness,
        Self::TeamBuilding,
    ];

    /// Return the category as a lowercase, kebab-case `&str`.
    ///
    /// # Examples
    /// ```
    /// use teamfit_core::Category;
    ///
    /// assert_eq!(Category::Culinary.as_str(), "culinary");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adventure => "adventure",
            Self::Nature => "nature",
            Self::History => "history",
            Self::Culinary => "culinary",
            Self::Sports => "sports",
            Self::Creative => "creative",
            Self::Wellness => "wellness",
            Self::TeamBuilding => "team-building",
        }
    }

    /// Position of the category in [`Category::ALL`].
    ///
    /// Always less than [`Category::COUNT`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Adventure => 0,
            Self::Nature => 1,
            Self::History => 2,
            Self::Culinary => 3,
            Self::Sports => 4,
            Self::Creative => 5,
            Self::Wellness => 6,
            Self::TeamBuilding => 7,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{name}'")]
pub struct ParseCategoryError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adventure" => Ok(Self::Adventure),
            "nature" => Ok(Self::Nature),
            "history" => Ok(Self::History),
            "culinary" => Ok(Self::Culinary),
            "sports" => Ok(Self::Sports),
            "creative" => Ok(Self::Creative),
            "wellness" => Ok(Self::Wellness),
            "team-building" | "team_building" | "teambuilding" => Ok(Self::TeamBuilding),
            _ => Err(ParseCategoryError { name: s.to_owned() }),
        }
    }
}
