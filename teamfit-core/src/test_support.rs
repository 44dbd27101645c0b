//! Shared fixtures for unit and behaviour tests across the workspace.

use crate::{Catalog, CatalogSection, UserSelection};

/// Thirty activity descriptions covering every category at least once.
pub const SAMPLE_ACTIVITIES: [&str; 30] = [
    "Guided hiking tour through the Alpine foothills",
    "White-water rafting and canyon descent for the whole team",
    "Private wine tasting at a family vineyard",
    "Pottery and ceramic painting workshop",
    "Escape room challenge in a historic prison",
    "Medieval castle and museum visit",
    "Sunset kayak trip on the lake",
    "Street art and graffiti walk with a local artist",
    "Team cooking class with a Michelin chef",
    "Yoga and meditation morning by the river",
    "Rock climbing and abseiling adventure day",
    "Photography safari in the national park",
    "Beach volleyball tournament",
    "Treasure hunt across the old town in small groups",
    "Paragliding tandem flights over the valley",
    "Improv theatre session to build confidence together",
    "Craft beer brewery tour",
    "Cycling along the coastal path",
    "Zipline park and treetop obstacle course",
    "Thermal spa and sauna afternoon",
    "Music production workshop: write a team anthem together",
    "Cave trekking and underground lake swim",
    "Golf lessons with a pro",
    "Mosaic design class using recycled glass",
    "Puzzle hunt Olympics with team relay races",
    "Cheese and chocolate tasting evening",
    "Birdwatching walk in the wetlands",
    "Sculpture drawing session at the gallery",
    "Canyon hike with a group picnic",
    "Ancient ruins guided walk",
];

/// Name of the single section in [`sample_catalog`].
pub const SAMPLE_SECTION: &str = "Team activities";

/// A one-section catalog holding [`SAMPLE_ACTIVITIES`].
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![CatalogSection::new(SAMPLE_SECTION, SAMPLE_ACTIVITIES)])
}

/// Answers for the standard quiz favouring adventure, creative and
/// team-building in equal measure.
///
/// Equivalent to `[[0],[3],[],[0],[1],[],[],[]]`.
#[must_use]
pub fn adventurous_selection() -> UserSelection {
    UserSelection::new([
        vec![0],
        vec![3],
        vec![],
        vec![0],
        vec![1],
        vec![],
        vec![],
        vec![],
    ])
}

/// A standard-quiz selection with nothing ticked.
#[must_use]
pub fn empty_selection() -> UserSelection {
    UserSelection::unanswered(8)
}
