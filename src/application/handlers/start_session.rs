//! StartSessionHandler - the entry step.
//!
//! Collects and range-validates the subject's age, seeds the answer store
//! with it, and opens a wizard session positioned at the first visible
//! question. This is the contract boundary for age: past this point the
//! core only ever checks presence.

use std::sync::Arc;

use crate::application::SurveyView;
use crate::domain::answers::AnswerStore;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{Age, DomainError, SessionId, ValidationError};
use crate::domain::survey::Wizard;
use crate::ports::WizardRepository;

/// Command to start a survey session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    /// Subject age in years, as entered.
    pub age: i32,
}

/// Result of successfully starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    pub view: SurveyView,
}

/// Error type for starting a session.
#[derive(Debug, Clone)]
pub enum StartSessionError {
    /// Age outside 10-100.
    InvalidAge(ValidationError),
    /// Domain or storage error.
    Domain(DomainError),
}

impl std::fmt::Display for StartSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartSessionError::InvalidAge(err) => write!(f, "{}", err),
            StartSessionError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StartSessionError {}

impl From<DomainError> for StartSessionError {
    fn from(err: DomainError) -> Self {
        StartSessionError::Domain(err)
    }
}

/// Handler for starting survey sessions.
pub struct StartSessionHandler {
    catalog: Arc<Catalog>,
    repository: Arc<dyn WizardRepository>,
}

impl StartSessionHandler {
    pub fn new(catalog: Arc<Catalog>, repository: Arc<dyn WizardRepository>) -> Self {
        Self { catalog, repository }
    }

    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, StartSessionError> {
        let age = Age::new(cmd.age).map_err(StartSessionError::InvalidAge)?;

        let wizard = Wizard::new(
            SessionId::new(),
            Arc::clone(&self.catalog),
            AnswerStore::with_age(age),
        )?;
        self.repository.save(&wizard).await?;

        tracing::info!(session_id = %wizard.id(), age = age.years(), "session started");

        Ok(StartSessionResult {
            session_id: wizard.id(),
            view: SurveyView::from_wizard(&wizard),
        })
    }
}
