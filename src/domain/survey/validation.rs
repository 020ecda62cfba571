//! Answer validator - per-type completeness rules.

use crate::domain::answers::{AnswerStore, AnswerValue};
use crate::domain::catalog::{QuestionDef, QuestionType};

/// Decides whether a question currently has a complete answer.
///
/// Pure function over the question definition and the current store: an
/// absent value always fails, and a stored value whose variant does not
/// match the declared question type fails too. This predicate is the sole
/// gate for forward navigation and is also consulted by the visibility
/// resolver for `depends_on_answered` predicates.
pub fn is_answered(question: &QuestionDef, answers: &AnswerStore) -> bool {
    let Some(value) = answers.get(&question.id) else {
        return false;
    };

    match (question.question_type, value) {
        (QuestionType::YesNo, AnswerValue::YesNo { .. }) => true,
        (QuestionType::Time12, AnswerValue::Time12 { value }) => value.is_complete(),
        (QuestionType::Frequency, AnswerValue::Frequency { value }) => value.is_complete(),
        (QuestionType::Duration, AnswerValue::Duration { value }) => value.is_complete(),
        (QuestionType::Text, AnswerValue::Text { value }) => !value.trim().is_empty(),
        // Stored variant does not match the declared type.
        _ => false,
    }
}
