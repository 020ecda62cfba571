//! RetreatHandler - backward navigation.
//!
//! Moving back is never gated on answer completeness. Retreating from the
//! first question means the subject is leaving the survey; the session is
//! discarded and the presentation layer returns to its entry point.

use std::sync::Arc;

use crate::application::SurveyView;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::survey::RetreatOutcome;
use crate::ports::WizardRepository;

/// Command to move back one step.
#[derive(Debug, Clone)]
pub struct RetreatCommand {
    pub session_id: SessionId,
}

/// Result of a backward navigation attempt.
#[derive(Debug, Clone)]
pub enum RetreatResult {
    /// Left the survey from the first question; the session is gone.
    Exited,
    /// Moved to the previous question.
    Moved { view: SurveyView },
}

/// Error type for backward navigation.
#[derive(Debug, Clone)]
pub enum RetreatError {
    /// Session not found.
    SessionNotFound(SessionId),
    /// Domain or storage error.
    Domain(DomainError),
}

impl std::fmt::Display for RetreatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetreatError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            RetreatError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RetreatError {}

impl From<DomainError> for RetreatError {
    fn from(err: DomainError) -> Self {
        RetreatError::Domain(err)
    }
}

/// Handler for backward navigation.
pub struct RetreatHandler {
    repository: Arc<dyn WizardRepository>,
}

impl RetreatHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RetreatCommand) -> Result<RetreatResult, RetreatError> {
        let mut wizard = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(RetreatError::SessionNotFound(cmd.session_id))?;

        match wizard.retreat() {
            RetreatOutcome::Exited => {
                self.repository.delete(&cmd.session_id).await?;
                tracing::info!(session_id = %cmd.session_id, "survey exited");
                Ok(RetreatResult::Exited)
            }
            RetreatOutcome::Moved { index } => {
                self.repository.update(&wizard).await?;
                tracing::debug!(session_id = %cmd.session_id, index, "retreated");
                Ok(RetreatResult::Moved {
                    view: SurveyView::from_wizard(&wizard),
                })
            }
        }
    }
}
