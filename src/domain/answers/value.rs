//! Answer value objects - one closed variant per question type.
//!
//! Values represent in-progress form state, not validated results: numeric
//! fields are kept as the raw typed strings so partially entered answers
//! round-trip through re-render without loss. Completeness is judged
//! separately by the answer validator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Yes / No choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Returns the display string, matching the catalog's `equals` values.
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// AM / PM selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// Period selector for frequency answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerPeriod {
    Day,
    Week,
    Year,
}

impl fmt::Display for PerPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerPeriod::Day => write!(f, "day"),
            PerPeriod::Week => write!(f, "week"),
            PerPeriod::Year => write!(f, "year"),
        }
    }
}

/// Unit selector for duration answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Hours,
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationUnit::Minutes => write!(f, "minutes"),
            DurationUnit::Hours => write!(f, "hours"),
        }
    }
}

/// 12-hour clock time, fields individually fillable while being entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Raw typed hour, expected to parse into 1..=12.
    pub hour: String,
    /// Raw typed minute, expected to parse into 0..=59.
    pub minute: String,
    /// Selected meridiem, `None` until chosen.
    pub meridiem: Option<Meridiem>,
}

impl TimeOfDay {
    /// Creates a fully filled time.
    pub fn new(hour: impl Into<String>, minute: impl Into<String>, meridiem: Meridiem) -> Self {
        Self {
            hour: hour.into(),
            minute: minute.into(),
            meridiem: Some(meridiem),
        }
    }

    /// Parses the hour field into 1..=12, if valid.
    pub fn parsed_hour(&self) -> Option<u8> {
        self.hour
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|h| (1..=12).contains(h))
    }

    /// Parses the minute field into 0..=59, if valid.
    pub fn parsed_minute(&self) -> Option<u8> {
        self.minute
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|m| *m <= 59)
    }

    /// True when all three fields individually validate.
    pub fn is_complete(&self) -> bool {
        self.parsed_hour().is_some() && self.parsed_minute().is_some() && self.meridiem.is_some()
    }
}

/// Count of occurrences per period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    /// Raw typed count, expected to parse as a number.
    pub count: String,
    /// Selected period, `None` until chosen.
    pub per: Option<PerPeriod>,
}

impl Frequency {
    /// Creates a filled frequency.
    pub fn new(count: impl Into<String>, per: PerPeriod) -> Self {
        Self {
            count: count.into(),
            per: Some(per),
        }
    }

    /// True when the count is non-empty and numeric and a period is chosen.
    ///
    /// No range check is applied here; negative counts are left to the
    /// input widget to prevent.
    pub fn is_complete(&self) -> bool {
        let count = self.count.trim();
        !count.is_empty() && count.parse::<f64>().is_ok() && self.per.is_some()
    }
}

/// Amount of time with a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSpan {
    /// Raw typed amount, expected to parse as a number.
    pub value: String,
    /// Selected unit, `None` until chosen.
    pub unit: Option<DurationUnit>,
}

impl DurationSpan {
    /// Creates a filled duration.
    pub fn new(value: impl Into<String>, unit: DurationUnit) -> Self {
        Self {
            value: value.into(),
            unit: Some(unit),
        }
    }

    /// True when the value is non-empty and numeric and a unit is chosen.
    pub fn is_complete(&self) -> bool {
        let value = self.value.trim();
        !value.is_empty() && value.parse::<f64>().is_ok() && self.unit.is_some()
    }
}

/// Captured answer, tagged by question type.
///
/// A closed variant: adding a question type forces an exhaustive update of
/// the validator and every renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerValue {
    YesNo { value: YesNo },
    Time12 { value: TimeOfDay },
    Frequency { value: Frequency },
    Duration { value: DurationSpan },
    Text { value: String },
}

impl AnswerValue {
    /// Creates a yes/no answer.
    pub fn yes_no(value: YesNo) -> Self {
        AnswerValue::YesNo { value }
    }

    /// Creates a time answer.
    pub fn time(value: TimeOfDay) -> Self {
        AnswerValue::Time12 { value }
    }

    /// Creates a frequency answer.
    pub fn frequency(value: Frequency) -> Self {
        AnswerValue::Frequency { value }
    }

    /// Creates a duration answer.
    pub fn duration(value: DurationSpan) -> Self {
        AnswerValue::Duration { value }
    }

    /// Creates a free-text answer.
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text { value: value.into() }
    }

    /// Strict choice equality against a catalog predicate value.
    ///
    /// Only choice-like answers can match: a yes/no answer matches its
    /// display string, a text answer matches its exact content. Structured
    /// answers never match.
    pub fn matches_choice(&self, equals: &str) -> bool {
        match self {
            AnswerValue::YesNo { value } => value.as_str() == equals,
            AnswerValue::Text { value } => value == equals,
            _ => false,
        }
    }
}
