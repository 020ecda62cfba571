//! AdvanceHandler - forward navigation.
//!
//! Forward movement is gated on the current answer validating as complete.
//! Advancing past the last visible question completes the session: the full
//! answer store is handed to the results collaborator and the session is
//! discarded.

use std::sync::Arc;

use crate::application::SurveyView;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::survey::{AdvanceOutcome, CompletedSurvey};
use crate::ports::{ResultsSink, WizardRepository};

/// Command to move forward one step.
#[derive(Debug, Clone)]
pub struct AdvanceCommand {
    pub session_id: SessionId,
}

/// Result of a forward navigation attempt.
#[derive(Debug, Clone)]
pub enum AdvanceResult {
    /// The current answer is incomplete; the same step is re-presented.
    Blocked { view: SurveyView },
    /// Moved to the next question.
    Moved { view: SurveyView },
    /// The survey finished; the payload was delivered to the results
    /// collaborator and the session no longer exists.
    Completed { survey: CompletedSurvey },
}

/// Error type for forward navigation.
#[derive(Debug, Clone)]
pub enum AdvanceError {
    /// Session not found.
    SessionNotFound(SessionId),
    /// Domain or delivery error.
    Domain(DomainError),
}

impl std::fmt::Display for AdvanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvanceError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            AdvanceError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AdvanceError {}

impl From<DomainError> for AdvanceError {
    fn from(err: DomainError) -> Self {
        AdvanceError::Domain(err)
    }
}

/// Handler for forward navigation.
pub struct AdvanceHandler {
    repository: Arc<dyn WizardRepository>,
    results: Arc<dyn ResultsSink>,
}

impl AdvanceHandler {
    pub fn new(repository: Arc<dyn WizardRepository>, results: Arc<dyn ResultsSink>) -> Self {
        Self { repository, results }
    }

    pub async fn handle(&self, cmd: AdvanceCommand) -> Result<AdvanceResult, AdvanceError> {
        let mut wizard = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(AdvanceError::SessionNotFound(cmd.session_id))?;

        match wizard.advance() {
            AdvanceOutcome::Blocked => {
                tracing::debug!(session_id = %cmd.session_id, "advance blocked");
                Ok(AdvanceResult::Blocked {
                    view: SurveyView::from_wizard(&wizard),
                })
            }
            AdvanceOutcome::Moved { index } => {
                self.repository.update(&wizard).await?;
                tracing::debug!(session_id = %cmd.session_id, index, "advanced");
                Ok(AdvanceResult::Moved {
                    view: SurveyView::from_wizard(&wizard),
                })
            }
            AdvanceOutcome::Completed => {
                let survey = wizard.completed_survey()?;
                self.results.publish(survey.clone()).await?;
                self.repository.delete(&cmd.session_id).await?;
                tracing::info!(session_id = %cmd.session_id, "survey handed off");
                Ok(AdvanceResult::Completed { survey })
            }
        }
    }
}
