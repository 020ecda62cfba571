//! In-memory wizard repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::survey::Wizard;
use crate::ports::WizardRepository;

/// Map-backed session storage. Sessions live exactly as long as the process
/// and the subject's run through the questionnaire.
#[derive(Default)]
pub struct InMemoryWizardRepository {
    sessions: RwLock<HashMap<SessionId, Wizard>>,
}

impl InMemoryWizardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true if no sessions are stored.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl WizardRepository for InMemoryWizardRepository {
    async fn save(&self, wizard: &Wizard) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(wizard.id(), wizard.clone());
        Ok(())
    }

    async fn update(&self, wizard: &Wizard) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&wizard.id()) {
            return Err(
                DomainError::new(ErrorCode::SessionNotFound, "Session not found")
                    .with_detail("session_id", wizard.id().to_string()),
            );
        }
        sessions.insert(wizard.id(), wizard.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Wizard>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::answers::AnswerStore;
    use crate::domain::catalog::sleepfit_catalog;
    use crate::domain::foundation::Age;

    fn wizard() -> Wizard {
        let store = AnswerStore::with_age(Age::new(28).unwrap());
        Wizard::new(
            SessionId::new(),
            Arc::new(sleepfit_catalog().clone()),
            store,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryWizardRepository::new();
        let w = wizard();
        repo.save(&w).await.unwrap();

        let found = repo.find_by_id(&w.id()).await.unwrap().unwrap();
        assert_eq!(found.id(), w.id());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryWizardRepository::new();
        assert!(repo.find_by_id(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_requires_existing_session() {
        let repo = InMemoryWizardRepository::new();
        let w = wizard();
        let err = repo.update(&w).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);

        repo.save(&w).await.unwrap();
        repo.update(&w).await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_the_session() {
        let repo = InMemoryWizardRepository::new();
        let w = wizard();
        repo.save(&w).await.unwrap();
        repo.delete(&w.id()).await.unwrap();
        assert!(repo.is_empty().await);
    }
}
