//! Tag free-text activities with category scores.
//!
//! The `ActivityTagger` trait turns an activity description into its
//! "activity DNA": a [`ScoreVector`](crate::ScoreVector) saying how strongly
//! the text evokes each [`Category`](crate::Category).

use crate::ScoreVector;

/// Compute the category scores evoked by an activity description.
///
/// Implementations must be pure: the same text always yields the same
/// vector. Text that evokes nothing yields [`ScoreVector::zero`]; that is a
/// valid result, not an error. Implementations must be thread-safe
/// (`Send` + `Sync`) so a single tagger can serve concurrent renders.
///
/// # Examples
///
/// ```rust
/// use teamfit_core::{ActivityTagger, Category, ScoreVector};
///
/// struct SpaTagger;
///
/// impl ActivityTagger for SpaTagger {
///     fn tag(&self, text: &str) -> ScoreVector {
///         let mut scores = ScoreVector::zero();
///         if text.contains("spa") {
///             scores.add(Category::Wellness, 1);
///         }
///         scores
///     }
/// }
///
/// assert_eq!(SpaTagger.tag("spa day").get(Category::Wellness), 1);
/// assert!(SpaTagger.tag("rafting").is_zero());
/// ```
pub trait ActivityTagger: Send + Sync {
    /// Return the activity DNA for `text`.
    fn tag(&self, text: &str) -> ScoreVector;
}
