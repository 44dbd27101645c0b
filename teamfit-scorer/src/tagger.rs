//! Keyword-driven activity tagging.
//!
//! A [`KeywordTable`] maps every category to trigger words. The
//! [`KeywordTagger`] lowercases an activity description and awards one point
//! per distinct keyword found as a substring, optionally capping each
//! category so a wordy description cannot dominate the ranking.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use teamfit_core::{ActivityTagger, Category, ScoreVector};

use crate::ScoringError;

/// Per-category ceiling applied by [`KeywordTagger::default`].
pub const DEFAULT_KEYWORD_CAP: u32 = 5;

const STANDARD_KEYWORDS: [(Category, &[&str]); Category::COUNT] = [
    (
        Category::Adventure,
        &[
            "adventure",
            "hike",
            "hiking",
            "climb",
            "rafting",
            "zipline",
            "zip line",
            "kayak",
            "canyon",
            "trek",
            "caving",
            "abseil",
            "paraglid",
            "via ferrata",
        ],
    ),
    (
        Category::Nature,
        &[
            "nature",
            "forest",
            "lake",
            "park",
            "garden",
            "wildlife",
            "river",
            "mountain",
            "waterfall",
            "botanical",
            "beach",
            "birdwatch",
        ],
    ),
    (
        Category::History,
        &[
            "history",
            "historic",
            "museum",
            "castle",
            "ancient",
            "heritage",
            "medieval",
            "monument",
            "ruins",
            "archaeolog",
            "old town",
            "cathedral",
        ],
    ),
    (
        Category::Culinary,
        &[
            "culinary",
            "cooking",
            "cuisine",
            "food",
            "wine",
            "tasting",
            "chef",
            "dinner",
            "brewery",
            "gastronom",
            "market",
            "cheese",
            "chocolate",
        ],
    ),
    (
        Category::Sports,
        &[
            "sport",
            "football",
            "soccer",
            "golf",
            "cycling",
            "bike",
            "tennis",
            "racing",
            "tournament",
            "bowling",
            "volleyball",
            "skiing",
            "regatta",
        ],
    ),
    (
        Category::Creative,
        &[
            "creative",
            "painting",
            "pottery",
            "craft",
            "photograph",
            "sculpt",
            "music",
            "theatre",
            "drawing",
            "design",
            "graffiti",
            "improv",
            "mosaic",
            "ceramic",
        ],
    ),
    (
        Category::Wellness,
        &[
            "wellness",
            "yoga",
            "meditat",
            "massage",
            "relax",
            "sauna",
            "mindful",
            "thermal",
            "retreat",
            "hot spring",
        ],
    ),
    (
        Category::TeamBuilding,
        &[
            "team",
            "escape room",
            "scavenger",
            "challenge",
            "collaborat",
            "cooperat",
            "puzzle",
            "treasure hunt",
            "group",
            "together",
            "olympics",
        ],
    ),
];

/// Declarative mapping from a category to its trigger keywords.
///
/// Keywords are stored lowercased and deduplicated per category.
///
/// # Examples
/// ```
/// use teamfit_core::Category;
/// use teamfit_scorer::KeywordTable;
///
/// # fn main() -> Result<(), teamfit_scorer::ScoringError> {
/// let table = KeywordTable::new().with_keyword(Category::Wellness, "Sauna")?;
/// assert_eq!(table.keywords(Category::Wellness), ["sauna"]);
/// assert!(table.keywords(Category::Sports).is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    map: BTreeMap<Category, Vec<String>>,
}

impl KeywordTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Register `keyword` for `category`.
    ///
    /// # Errors
    /// Returns [`ScoringError::BlankKeyword`] when the keyword is empty or
    /// whitespace, since it would match every description.
    pub fn insert(
        &mut self,
        category: Category,
        keyword: impl AsRef<str>,
    ) -> Result<(), ScoringError> {
        let normalised = keyword.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(ScoringError::BlankKeyword { category });
        }
        let keywords = self.map.entry(category).or_default();
        if !keywords.contains(&normalised) {
            keywords.push(normalised);
        }
        Ok(())
    }

    /// Register a keyword while consuming `self`, enabling chaining.
    ///
    /// # Errors
    /// Returns [`ScoringError::BlankKeyword`] for blank keywords.
    pub fn with_keyword(
        mut self,
        category: Category,
        keyword: impl AsRef<str>,
    ) -> Result<Self, ScoringError> {
        self.insert(category, keyword)?;
        Ok(self)
    }

    /// Keywords registered for `category`.
    #[must_use]
    pub fn keywords(&self, category: Category) -> &[String] {
        self.map
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate over all keywords grouped by category.
    fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.map
            .iter()
            .map(|(&category, keywords)| (category, keywords.as_slice()))
    }
}

impl Default for KeywordTable {
    /// The built-in vocabulary covering every category.
    fn default() -> Self {
        let map = STANDARD_KEYWORDS
            .iter()
            .map(|&(category, keywords)| {
                (
                    category,
                    keywords.iter().map(|&keyword| keyword.to_owned()).collect(),
                )
            })
            .collect();
        Self { map }
    }
}

/// [`ActivityTagger`] backed by a [`KeywordTable`].
///
/// # Examples
/// ```
/// use teamfit_core::{ActivityTagger, Category};
/// use teamfit_scorer::KeywordTagger;
///
/// let tagger = KeywordTagger::default();
/// let dna = tagger.tag("Canyon hike with a group picnic");
/// assert_eq!(dna.get(Category::Adventure), 2);
/// assert_eq!(dna.get(Category::TeamBuilding), 1);
/// assert!(tagger.tag("Quarterly budget review").is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTagger {
    table: KeywordTable,
    cap: Option<u32>,
}

impl KeywordTagger {
    /// Build a tagger that caps each category at `cap` points.
    #[must_use]
    pub const fn new(table: KeywordTable, cap: u32) -> Self {
        Self {
            table,
            cap: Some(cap),
        }
    }

    /// Build a tagger whose category scores grow with every keyword hit.
    #[must_use]
    pub const fn uncapped(table: KeywordTable) -> Self {
        Self { table, cap: None }
    }

    /// Per-category ceiling, if any.
    #[must_use]
    pub const fn cap(&self) -> Option<u32> {
        self.cap
    }
}

impl Default for KeywordTagger {
    fn default() -> Self {
        Self::new(KeywordTable::default(), DEFAULT_KEYWORD_CAP)
    }
}

impl ActivityTagger for KeywordTagger {
    fn tag(&self, text: &str) -> ScoreVector {
        let haystack = text.to_lowercase();
        let mut dna = ScoreVector::zero();
        for (category, keywords) in self.table.iter() {
            let hits = keywords
                .iter()
                .filter(|keyword| haystack.contains(keyword.as_str()))
                .count();
            dna.add(category, u32::try_from(hits).unwrap_or(u32::MAX));
        }
        if let Some(ceiling) = self.cap {
            dna.cap(ceiling);
        }
        dna
    }
}
