//! Results collaborator port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::survey::CompletedSurvey;

/// Receives the completed answer set at session completion.
///
/// The payload is opaque to the receiver beyond its serialized shape: every
/// question reachable in the final visible sequence has a complete answer,
/// except those excluded by an `optional_if` skip. The core makes no further
/// claims about what the receiver does with it.
#[async_trait]
pub trait ResultsSink: Send + Sync {
    /// Deliver a completed survey.
    ///
    /// # Errors
    ///
    /// - `ResultsDeliveryError` if the collaborator cannot accept it
    async fn publish(&self, survey: CompletedSurvey) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn results_sink_is_object_safe() {
        fn _accepts_dyn(_sink: &dyn ResultsSink) {}
    }
}
