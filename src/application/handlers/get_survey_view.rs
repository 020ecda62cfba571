//! GetSurveyViewHandler - read side.

use std::sync::Arc;

use crate::application::SurveyView;
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::WizardRepository;

/// Query for the current state of a session.
#[derive(Debug, Clone)]
pub struct GetSurveyViewQuery {
    pub session_id: SessionId,
}

/// Error type for reading a session.
#[derive(Debug, Clone)]
pub enum GetSurveyViewError {
    /// Session not found.
    SessionNotFound(SessionId),
    /// Storage error.
    Domain(DomainError),
}

impl std::fmt::Display for GetSurveyViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetSurveyViewError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            GetSurveyViewError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GetSurveyViewError {}

impl From<DomainError> for GetSurveyViewError {
    fn from(err: DomainError) -> Self {
        GetSurveyViewError::Domain(err)
    }
}

/// Handler for reading session state.
pub struct GetSurveyViewHandler {
    repository: Arc<dyn WizardRepository>,
}

impl GetSurveyViewHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSurveyViewQuery) -> Result<SurveyView, GetSurveyViewError> {
        let wizard = self
            .repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or(GetSurveyViewError::SessionNotFound(query.session_id))?;

        Ok(SurveyView::from_wizard(&wizard))
    }
}
