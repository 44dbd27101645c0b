//! Activity catalog content and ranking results.
//!
//! Catalog text is read-only input. Ranking never rewrites it; results refer
//! back to entries by their position within a section.

use serde::{Deserialize, Serialize};

use crate::Category;

/// A free-text activity and its position within a catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry<'a> {
    /// Zero-based position within the section.
    pub index: usize,
    /// Activity description.
    pub text: &'a str,
}

/// A named group of activity descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Section heading, e.g. `"Day trips"`.
    pub name: String,
    /// Activity descriptions in curated order.
    pub activities: Vec<String>,
}

impl CatalogSection {
    /// Build a section from a name and descriptions.
    pub fn new<I, S>(name: impl Into<String>, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            activities: activities.into_iter().map(Into::into).collect(),
        }
    }

    /// Iterate over the section's entries in catalog order.
    ///
    /// # Examples
    /// ```
    /// use teamfit_core::CatalogSection;
    ///
    /// let section = CatalogSection::new("Trips", ["Kayak tour", "Wine tasting"]);
    /// let entries: Vec<_> = section.entries().collect();
    /// assert_eq!(entries[1].index, 1);
    /// assert_eq!(entries[1].text, "Wine tasting");
    /// ```
    pub fn entries(&self) -> impl Iterator<Item = ActivityEntry<'_>> {
        self.activities
            .iter()
            .enumerate()
            .map(|(index, text)| ActivityEntry {
                index,
                text: text.as_str(),
            })
    }

    /// Description at `index`, if present.
    #[must_use]
    pub fn activity(&self, index: usize) -> Option<&str> {
        self.activities.get(index).map(String::as_str)
    }
}

/// Activity content grouped by section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Sections in display order.
    pub sections: Vec<CatalogSection>,
}

impl Catalog {
    /// Build a catalog from sections.
    #[must_use]
    pub const fn new(sections: Vec<CatalogSection>) -> Self {
        Self { sections }
    }

    /// Section with the given name, if present.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&CatalogSection> {
        self.sections.iter().find(|section| section.name == name)
    }
}

/// An activity selected for a profile, with ranking metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedActivity {
    /// Position of the activity within its section.
    pub index: usize,
    /// Weighted relevance; always positive for returned activities.
    pub relevance: u32,
    /// Top categories that contributed to the relevance, in priority order.
    pub matched_categories: Vec<Category>,
}

/// Ranked activities for one catalog section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecommendation {
    /// Name of the section the activities came from.
    pub section: String,
    /// Selected activities, most relevant first.
    pub activities: Vec<RankedActivity>,
}
