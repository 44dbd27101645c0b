//! Quiz definitions and the answers a team selects.
//!
//! A [`Quiz`] is static configuration: an ordered list of questions whose
//! answer options each carry a partial [`ScoreVector`]. A [`UserSelection`]
//! records which options a team ticked for each question and lives only as
//! long as it takes to derive a profile from it.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Category, ScoreVector};

/// One selectable answer and the categories it nudges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Text shown to the team.
    pub label: String,
    /// Points added to the team's aggregate when this option is selected.
    #[serde(default)]
    pub scores: ScoreVector,
}

impl AnswerOption {
    /// Build an option from a label and `(category, points)` pairs.
    ///
    /// # Examples
    /// ```
    /// use teamfit_core::{AnswerOption, Category};
    ///
    /// let option = AnswerOption::new("Rafting", [(Category::Adventure, 3)]);
    /// assert_eq!(option.scores.get(Category::Adventure), 3);
    /// assert_eq!(option.scores.get(Category::Nature), 0);
    /// ```
    pub fn new<I>(label: impl Into<String>, scores: I) -> Self
    where
        I: IntoIterator<Item = (Category, u32)>,
    {
        Self {
            label: label.into(),
            scores: scores.into_iter().collect(),
        }
    }
}

/// A multiple-choice, multi-select question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Stable identifier, unique within a quiz.
    pub id: String,
    /// Prompt shown to the team.
    pub prompt: String,
    /// Answer options in display order.
    pub options: Vec<AnswerOption>,
}

/// Errors returned by [`Quiz::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No questions were supplied.
    #[error("quiz must contain at least one question")]
    Empty,
    /// A question offered nothing to select.
    #[error("question '{question}' has no answer options")]
    NoOptions {
        /// Identifier of the offending question.
        question: String,
    },
    /// Two questions shared an identifier.
    #[error("question id '{id}' is used more than once")]
    DuplicateQuestionId {
        /// The repeated identifier.
        id: String,
    },
}

/// An ordered, validated list of questions.
///
/// # Examples
/// ```
/// use teamfit_core::Quiz;
///
/// let quiz = Quiz::standard();
/// assert_eq!(quiz.len(), 8);
/// assert!(quiz.option(0, 0).is_some());
/// assert!(quiz.option(0, 99).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuizDocument")]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

#[derive(Deserialize)]
struct QuizDocument {
    questions: Vec<QuizQuestion>,
}

impl TryFrom<QuizDocument> for Quiz {
    type Error = QuizError;

    fn try_from(document: QuizDocument) -> Result<Self, Self::Error> {
        Self::new(document.questions)
    }
}

impl Quiz {
    /// Validate and construct a [`Quiz`].
    ///
    /// # Errors
    /// Returns [`QuizError`] when the list is empty, a question has no
    /// options, or two questions share an identifier.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if question.options.is_empty() {
                return Err(QuizError::NoOptions {
                    question: question.id.clone(),
                });
            }
            if !seen.insert(question.id.as_str()) {
                return Err(QuizError::DuplicateQuestionId {
                    id: question.id.clone(),
                });
            }
        }
        Ok(Self { questions })
    }

    /// The built-in eight-question team profile quiz.
    ///
    /// Built once per process and shared read-only afterwards.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_QUIZ
    }

    /// Questions in display order.
    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false` for a validated quiz; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at `index`, if present.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    /// Answer option `option` of question `question`, if both exist.
    #[must_use]
    pub fn option(&self, question: usize, option: usize) -> Option<&AnswerOption> {
        self.question(question)
            .and_then(|entry| entry.options.get(option))
    }
}

type OptionRow = (&'static str, &'static [(Category, u32)]);
type QuestionRow = (&'static str, &'static str, &'static [OptionRow]);

const STANDARD_QUESTIONS: &[QuestionRow] = {
    use Category::{
        Adventure, Creative, Culinary, History, Nature, Sports, TeamBuilding, Wellness,
    };
    &[
        (
            "pace",
            "What pace suits your team best?",
            &[
                ("Fast and full of adrenaline", &[(Adventure, 3), (Sports, 1)]),
                ("Steady, with time to look around", &[(Nature, 2), (History, 1)]),
                ("Slow and restorative", &[(Wellness, 3)]),
                ("Whatever keeps everyone talking", &[(TeamBuilding, 2), (Culinary, 1)]),
            ],
        ),
        (
            "setting",
            "Where would your team rather spend the day?",
            &[
                ("Mountains, rivers or forest trails", &[(Nature, 3), (Adventure, 1)]),
                ("Old town streets and museums", &[(History, 3)]),
                ("A kitchen, market or vineyard", &[(Culinary, 3)]),
                ("A studio or workshop", &[(Creative, 3)]),
            ],
        ),
        (
            "energy",
            "How physically active should the day be?",
            &[
                ("Very, we want to break a sweat", &[(Sports, 3), (Adventure, 1)]),
                ("Moderately active", &[(Nature, 1), (Sports, 1), (TeamBuilding, 1)]),
                ("Light walking at most", &[(History, 1), (Culinary, 1)]),
                ("Not at all, we want to unwind", &[(Wellness, 3)]),
            ],
        ),
        (
            "takeaway",
            "What should the team take home from the day?",
            &[
                ("Stronger collaboration", &[(TeamBuilding, 3)]),
                ("A new skill or something they made", &[(Creative, 2), (Culinary, 1)]),
                ("Fresh energy and calm", &[(Wellness, 2), (Nature, 1)]),
                ("A story worth retelling", &[(Adventure, 2), (History, 1)]),
            ],
        ),
        (
            "food",
            "How important is food to the outing?",
            &[
                ("It is the main event", &[(Culinary, 3)]),
                ("A good lunch outdoors would be nice", &[(Culinary, 1), (Nature, 1)]),
                ("We will bring snacks and keep moving", &[(Adventure, 1), (Sports, 1)]),
                ("Healthy and light, please", &[(Wellness, 2)]),
            ],
        ),
        (
            "competition",
            "How does the team feel about competition?",
            &[
                ("Bring on the leaderboard", &[(Sports, 3)]),
                ("Friendly challenges are fun", &[(TeamBuilding, 2), (Sports, 1)]),
                ("We prefer to cooperate", &[(TeamBuilding, 2), (Creative, 1)]),
                ("Let's skip it", &[(Wellness, 1), (History, 1)]),
            ],
        ),
        (
            "curiosity",
            "What sparks your team's curiosity?",
            &[
                ("How things were built and why", &[(History, 3)]),
                ("Wildlife and landscapes", &[(Nature, 3)]),
                ("Flavours and recipes", &[(Culinary, 3)]),
                ("Art, music and design", &[(Creative, 3)]),
            ],
        ),
        (
            "rainy-day",
            "If it rains on the day, the team would rather...",
            &[
                ("Put on jackets and carry on", &[(Adventure, 2), (Nature, 1)]),
                ("Head into a museum or gallery", &[(History, 1), (Creative, 1)]),
                ("Book a spa afternoon", &[(Wellness, 3)]),
                ("Take on an escape room", &[(TeamBuilding, 3)]),
            ],
        ),
    ]
};

static STANDARD_QUIZ: LazyLock<Quiz> = LazyLock::new(|| Quiz {
    questions: STANDARD_QUESTIONS
        .iter()
        .map(|&(id, prompt, options)| QuizQuestion {
            id: id.to_owned(),
            prompt: prompt.to_owned(),
            options: options
                .iter()
                .map(|&(label, scores)| AnswerOption::new(label, scores.iter().copied()))
                .collect(),
        })
        .collect(),
});

/// The options a team ticked, one set per question.
///
/// Rows are indexed by question position. Each row is a set, so ticking the
/// same option twice counts once.
///
/// # Examples
/// ```
/// use teamfit_core::UserSelection;
///
/// let mut selection = UserSelection::unanswered(3);
/// assert!(selection.select(1, 2));
/// assert!(!selection.select(5, 0));
/// assert_eq!(selection.len(), 3);
/// assert!(selection.selected(1).is_some_and(|row| row.contains(&2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSelection {
    answers: Vec<BTreeSet<usize>>,
}

impl UserSelection {
    /// Build a selection from one row of option indices per question.
    pub fn new<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = usize>,
    {
        Self {
            answers: rows
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        }
    }

    /// A selection with `questions` empty rows.
    #[must_use]
    pub fn unanswered(questions: usize) -> Self {
        Self {
            answers: vec![BTreeSet::new(); questions],
        }
    }

    /// Tick `option` for `question`.
    ///
    /// Returns `false` when the selection has no row for `question`.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        self.answers
            .get_mut(question)
            .map(|row| row.insert(option))
            .is_some()
    }

    /// Options ticked for `question`, if the row exists.
    #[must_use]
    pub fn selected(&self, question: usize) -> Option<&BTreeSet<usize>> {
        self.answers.get(question)
    }

    /// Number of question rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Report whether the selection has no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over `(question index, ticked options)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &BTreeSet<usize>)> {
        self.answers.iter().enumerate()
    }
}
