//! Read models for the presentation layer.

use serde::Serialize;

use crate::domain::answers::AnswerValue;
use crate::domain::catalog::{QuestionDef, QuestionType};
use crate::domain::foundation::{QuestionId, SessionId};
use crate::domain::survey::{Wizard, WizardStatus};

/// The current question, with whatever (possibly partial) value the subject
/// has entered so far. Partial values are returned verbatim so re-rendering
/// the step loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub section: String,
    pub question: String,
    pub question_type: QuestionType,
    pub sublabel: Option<String>,
    pub info: Option<String>,
    pub helper: Option<String>,
    pub answer: Option<AnswerValue>,
    pub is_answered: bool,
}

/// Snapshot of a survey session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyView {
    pub session_id: SessionId,
    pub status: WizardStatus,
    /// Position within the visible sequence, clamped.
    pub current_index: usize,
    /// Length of the visible sequence right now.
    pub total_visible: usize,
    pub question: Option<QuestionView>,
}

impl SurveyView {
    /// Builds a view from the wizard's current state.
    pub fn from_wizard(wizard: &Wizard) -> Self {
        let question = wizard.current_question().map(|q| Self::question_view(wizard, q));
        Self {
            session_id: wizard.id(),
            status: wizard.status(),
            current_index: wizard.current_index(),
            total_visible: wizard.visible().len(),
            question,
        }
    }

    fn question_view(wizard: &Wizard, q: &QuestionDef) -> QuestionView {
        QuestionView {
            id: q.id.clone(),
            section: q.section.clone(),
            question: q.question.clone(),
            question_type: q.question_type,
            sublabel: q.sublabel.clone(),
            info: q.info.clone(),
            helper: q.helper.clone(),
            answer: wizard.answers().get(&q.id).cloned(),
            is_answered: wizard.current_is_answered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::answers::{AnswerStore, AnswerValue, Meridiem, TimeOfDay, YesNo};
    use crate::domain::catalog::sleepfit_catalog;
    use crate::domain::foundation::Age;

    fn wizard() -> Wizard {
        Wizard::new(
            SessionId::new(),
            Arc::new(sleepfit_catalog().clone()),
            AnswerStore::with_age(Age::new(35).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn view_exposes_first_question_initially() {
        let view = SurveyView::from_wizard(&wizard());
        assert_eq!(view.status, WizardStatus::InProgress);
        assert_eq!(view.current_index, 0);
        let q = view.question.unwrap();
        assert_eq!(q.id.as_str(), "work");
        assert!(!q.is_answered);
    }

    #[test]
    fn view_round_trips_partial_answers() {
        let mut w = wizard();
        w.update_answer("work".into(), AnswerValue::yes_no(YesNo::Yes))
            .unwrap();
        w.advance();

        let partial = TimeOfDay {
            hour: "10".into(),
            minute: "".into(),
            meridiem: Some(Meridiem::Pm),
        };
        w.update_answer("sleep_weekday_bedtime".into(), AnswerValue::time(partial.clone()))
            .unwrap();

        let view = SurveyView::from_wizard(&w);
        let q = view.question.unwrap();
        assert_eq!(q.answer, Some(AnswerValue::time(partial)));
        assert!(!q.is_answered);
    }

    #[test]
    fn view_counts_the_visible_sequence() {
        let view = SurveyView::from_wizard(&wizard());
        // Unanswered store: work=? hides sleep_weekend_diff, the two
        // depends_on_answered durations are hidden, the optional_if weekend
        // questions are visible (absent answer never matches).
        assert_eq!(view.total_visible, 8);
    }
}
