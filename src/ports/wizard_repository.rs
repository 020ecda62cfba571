//! Wizard repository port.
//!
//! Defines the contract for storing and retrieving in-flight wizard
//! sessions. The system deliberately has no persistence beyond the session
//! lifetime, so the only production implementation is in-memory; the port
//! exists to keep handlers decoupled from storage.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::survey::Wizard;

/// Storage port for in-flight wizard sessions.
#[async_trait]
pub trait WizardRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on storage failure
    async fn save(&self, wizard: &Wizard) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn update(&self, wizard: &Wizard) -> Result<(), DomainError>;

    /// Find a session by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Wizard>, DomainError>;

    /// Remove a session.
    ///
    /// Sessions are discarded on completion and on exit; this is the normal
    /// end of a session's life, not an administrative operation.
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn wizard_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn WizardRepository) {}
    }
}
