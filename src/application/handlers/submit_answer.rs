//! SubmitAnswerHandler - records an answer edit.
//!
//! An edit never moves the current position; it only refreshes the visible
//! sequence (and clamps the position if the sequence shrank).

use std::sync::Arc;

use crate::application::SurveyView;
use crate::domain::answers::AnswerValue;
use crate::domain::foundation::{DomainError, QuestionId, SessionId};
use crate::ports::WizardRepository;

/// Command to record an answer for a question.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    pub question_id: QuestionId,
    pub value: AnswerValue,
}

/// Result of recording an answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub view: SurveyView,
}

/// Error type for recording an answer.
#[derive(Debug, Clone)]
pub enum SubmitAnswerError {
    /// Session not found.
    SessionNotFound(SessionId),
    /// Domain error (unknown question, completed session).
    Domain(DomainError),
}

impl std::fmt::Display for SubmitAnswerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitAnswerError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            SubmitAnswerError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitAnswerError {}

impl From<DomainError> for SubmitAnswerError {
    fn from(err: DomainError) -> Self {
        SubmitAnswerError::Domain(err)
    }
}

/// Handler for answer submissions.
pub struct SubmitAnswerHandler {
    repository: Arc<dyn WizardRepository>,
}

impl SubmitAnswerHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnswerCommand,
    ) -> Result<SubmitAnswerResult, SubmitAnswerError> {
        let mut wizard = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SubmitAnswerError::SessionNotFound(cmd.session_id))?;

        wizard.update_answer(cmd.question_id.clone(), cmd.value)?;
        self.repository.update(&wizard).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            question_id = %cmd.question_id,
            "answer recorded"
        );

        Ok(SubmitAnswerResult {
            view: SurveyView::from_wizard(&wizard),
        })
    }
}
