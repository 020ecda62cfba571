//! Question definition value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// Input type of a question, driving both the capture widget and the
/// completeness rule applied before forward navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Yes / No choice.
    YesNo,
    /// 12-hour clock time: hour, minute, AM/PM.
    Time12,
    /// Count per period (day, week, year).
    Frequency,
    /// Amount of time with a unit (minutes, hours).
    Duration,
    /// Free text. The fallback type.
    #[default]
    Text,
}

impl QuestionType {
    /// Returns a short label for display and logging.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::YesNo => "yes/no",
            QuestionType::Time12 => "time",
            QuestionType::Frequency => "frequency",
            QuestionType::Duration => "duration",
            QuestionType::Text => "text",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Visibility predicate: show this question only if the referenced
/// question's answer equals `equals` (strict choice equality; an absent
/// answer never matches).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependsOn {
    pub id: QuestionId,
    pub equals: String,
}

/// Skip predicate: exclude this question from the visible sequence entirely
/// when the referenced question's answer equals `equals`. The skipped
/// question is treated as vacuously satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalIf {
    pub id: QuestionId,
    pub equals: String,
}

/// Immutable question definition.
///
/// # Invariants
///
/// All of `depends_on`, `depends_on_answered`, and `optional_if` must
/// reference a question earlier in catalog order; `Catalog::new` enforces
/// this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDef {
    /// Stable key into the answer store.
    pub id: QuestionId,

    /// Grouping label for display and step-bucketing.
    pub section: String,

    /// The question text shown to the subject.
    pub question: String,

    /// Input type.
    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Visible only if the referenced answer equals a value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,

    /// Visible only while the referenced question validates as answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on_answered: Option<QuestionId>,

    /// Excluded from the visible sequence when the referenced answer matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_if: Option<OptionalIf>,

    /// Presentation-only secondary label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,

    /// Presentation-only clarifying text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    /// Presentation-only input hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
}

impl QuestionDef {
    /// Creates a definition with no visibility modifiers.
    pub fn new(
        id: impl Into<QuestionId>,
        section: impl Into<String>,
        question_type: QuestionType,
        question: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            section: section.into(),
            question: question.into(),
            question_type,
            depends_on: None,
            depends_on_answered: None,
            optional_if: None,
            sublabel: None,
            info: None,
            helper: None,
        }
    }

    /// Adds a depends-on predicate.
    pub fn depends_on(mut self, id: impl Into<QuestionId>, equals: impl Into<String>) -> Self {
        self.depends_on = Some(DependsOn {
            id: id.into(),
            equals: equals.into(),
        });
        self
    }

    /// Adds a depends-on-answered predicate.
    pub fn depends_on_answered(mut self, id: impl Into<QuestionId>) -> Self {
        self.depends_on_answered = Some(id.into());
        self
    }

    /// Adds an optional-if skip predicate.
    pub fn optional_if(mut self, id: impl Into<QuestionId>, equals: impl Into<String>) -> Self {
        self.optional_if = Some(OptionalIf {
            id: id.into(),
            equals: equals.into(),
        });
        self
    }

    /// Adds a presentation sublabel.
    pub fn sublabel(mut self, text: impl Into<String>) -> Self {
        self.sublabel = Some(text.into());
        self
    }

    /// Adds presentation info text.
    pub fn info(mut self, text: impl Into<String>) -> Self {
        self.info = Some(text.into());
        self
    }

    /// Returns true if the definition carries no visibility modifiers and is
    /// therefore always included in the visible sequence.
    pub fn is_unconditional(&self) -> bool {
        self.depends_on.is_none()
            && self.depends_on_answered.is_none()
            && self.optional_if.is_none()
    }
}
