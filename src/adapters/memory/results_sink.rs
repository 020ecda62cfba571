//! In-memory results sink.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::survey::CompletedSurvey;
use crate::ports::ResultsSink;

/// Collects completed surveys in memory.
///
/// Backs the console results view and the tests; the results page only
/// echoes captured answers, so holding the payloads is all it needs.
#[derive(Default)]
pub struct InMemoryResultsSink {
    received: RwLock<Vec<CompletedSurvey>>,
}

impl InMemoryResultsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far.
    pub async fn received(&self) -> Vec<CompletedSurvey> {
        self.received.read().await.clone()
    }

    /// The most recently received survey, if any.
    pub async fn last(&self) -> Option<CompletedSurvey> {
        self.received.read().await.last().cloned()
    }
}

#[async_trait]
impl ResultsSink for InMemoryResultsSink {
    async fn publish(&self, survey: CompletedSurvey) -> Result<(), DomainError> {
        tracing::info!(session_id = %survey.session_id, answers = survey.answers.len(), "survey completed");
        self.received.write().await.push(survey);
        Ok(())
    }
}
