//! Wizard aggregate - drives the current position within the visible
//! sequence and finalizes the answer set.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::answers::{AnswerStore, AnswerValue};
use crate::domain::catalog::{Catalog, QuestionDef};
use crate::domain::foundation::{Age, DomainError, ErrorCode, QuestionId, SessionId, Timestamp};

use super::validation::is_answered;
use super::visibility::compute_visible;

/// Lifecycle state of a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    /// Stepping through the visible sequence.
    InProgress,
    /// Advanced past the last visible question; answers handed off.
    Completed,
    /// The visible sequence is empty. Terminal, but distinct from normal
    /// completion: the presentation layer surfaces it instead of a results
    /// view.
    NoQuestions,
}

impl WizardStatus {
    /// True for states from which no further forward navigation occurs.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStatus::Completed | WizardStatus::NoQuestions)
    }
}

/// Result of a forward navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The current question is not answered; position unchanged.
    Blocked,
    /// Moved to the next visible question.
    Moved { index: usize },
    /// Advanced past the last visible question; the session is complete.
    Completed,
}

/// Result of a backward navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    /// Already at the first question (or no questions); the subject is
    /// leaving the session.
    Exited,
    /// Moved to the previous visible question.
    Moved { index: usize },
}

/// The completed answer set handed to the results collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedSurvey {
    pub session_id: SessionId,
    pub age: Age,
    pub answers: AnswerStore,
    pub completed_at: Timestamp,
}

/// Wizard controller for one survey session.
///
/// # Invariants
///
/// - The answer store always carries an age (checked at construction).
/// - `current_index` is clamped against the freshly recomputed visible
///   sequence on every read; it never indexes out of range even when an
///   edit shrinks the sequence.
/// - Terminal sessions refuse further answer writes.
#[derive(Debug, Clone)]
pub struct Wizard {
    id: SessionId,
    catalog: Arc<Catalog>,
    answers: AnswerStore,
    current_index: usize,
    status: WizardStatus,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl Wizard {
    /// Creates a wizard positioned at the first visible question.
    ///
    /// # Errors
    ///
    /// - `MissingAge` if the store was not seeded with the subject's age.
    ///   Age range validation is the entry step's job; only presence is
    ///   checked here.
    pub fn new(id: SessionId, catalog: Arc<Catalog>, answers: AnswerStore) -> Result<Self, DomainError> {
        if answers.age().is_none() {
            return Err(DomainError::new(
                ErrorCode::MissingAge,
                "Wizard requires an age collected by the entry step",
            ));
        }

        let status = if compute_visible(&catalog, &answers).is_empty() {
            WizardStatus::NoQuestions
        } else {
            WizardStatus::InProgress
        };

        Ok(Self {
            id,
            catalog,
            answers,
            current_index: 0,
            status,
            started_at: Timestamp::now(),
            completed_at: None,
        })
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The catalog this session steps through.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current answer store.
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Current lifecycle state.
    pub fn status(&self) -> WizardStatus {
        self.status
    }

    /// When the session started.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// When the session completed, if it has.
    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// The currently visible question sequence, recomputed on every call.
    pub fn visible(&self) -> Vec<&QuestionDef> {
        compute_visible(&self.catalog, &self.answers)
    }

    /// Current position within the visible sequence, clamped to its length.
    pub fn current_index(&self) -> usize {
        self.clamped_index(self.visible().len())
    }

    /// The question at the current position, or `None` when the visible
    /// sequence is empty.
    pub fn current_question(&self) -> Option<&QuestionDef> {
        let visible = self.visible();
        if visible.is_empty() {
            None
        } else {
            Some(visible[self.clamped_index(visible.len())])
        }
    }

    /// True if the question at the current position has a complete answer.
    pub fn current_is_answered(&self) -> bool {
        self.current_question()
            .map(|q| is_answered(q, &self.answers))
            .unwrap_or(false)
    }

    /// Merges an answer into the store, last-write-wins.
    ///
    /// Does not move the current position except to clamp it when the
    /// recomputed visible sequence shrank below it.
    ///
    /// # Errors
    ///
    /// - `SessionCompleted` if the session already reached a terminal
    ///   completion,
    /// - `QuestionNotFound` if the id is not in the catalog.
    pub fn update_answer(&mut self, id: QuestionId, value: AnswerValue) -> Result<(), DomainError> {
        if self.status == WizardStatus::Completed {
            return Err(DomainError::new(
                ErrorCode::SessionCompleted,
                "Completed sessions do not accept answers",
            ));
        }
        if !self.catalog.contains(&id) {
            return Err(
                DomainError::new(ErrorCode::QuestionNotFound, "Unknown question id")
                    .with_detail("question_id", id.to_string()),
            );
        }

        self.answers.set(id, value);
        self.refresh_after_mutation();
        Ok(())
    }

    /// Attempts to move forward one step.
    ///
    /// Blocked unless the current question validates as answered. Advancing
    /// past the last visible question completes the session.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.status.is_terminal() {
            return AdvanceOutcome::Blocked;
        }

        let visible = self.visible();
        if visible.is_empty() {
            self.status = WizardStatus::NoQuestions;
            return AdvanceOutcome::Blocked;
        }

        let index = self.clamped_index(visible.len());
        if !is_answered(visible[index], &self.answers) {
            return AdvanceOutcome::Blocked;
        }

        if index + 1 == visible.len() {
            self.status = WizardStatus::Completed;
            self.completed_at = Some(Timestamp::now());
            return AdvanceOutcome::Completed;
        }

        self.current_index = index + 1;
        AdvanceOutcome::Moved { index: self.current_index }
    }

    /// Moves backward one step, or signals exit at the first question.
    ///
    /// Never gated on answer completeness and never underflows.
    pub fn retreat(&mut self) -> RetreatOutcome {
        let visible = self.visible();
        if visible.is_empty() {
            return RetreatOutcome::Exited;
        }

        let index = self.clamped_index(visible.len());
        if index == 0 {
            return RetreatOutcome::Exited;
        }

        self.current_index = index - 1;
        RetreatOutcome::Moved { index: self.current_index }
    }

    /// Snapshots the finished answer set for the results collaborator.
    ///
    /// # Errors
    ///
    /// - `SessionCompleted` (as a state guard) if the session has not
    ///   actually completed.
    pub fn completed_survey(&self) -> Result<CompletedSurvey, DomainError> {
        let completed_at = match (self.status, self.completed_at) {
            (WizardStatus::Completed, Some(at)) => at,
            _ => {
                return Err(DomainError::new(
                    ErrorCode::InternalError,
                    "Session has not completed",
                ))
            }
        };
        let age = self
            .answers
            .age()
            .ok_or_else(|| DomainError::new(ErrorCode::MissingAge, "Answer store lost its age"))?;

        Ok(CompletedSurvey {
            session_id: self.id,
            age,
            answers: self.answers.clone(),
            completed_at,
        })
    }

    fn refresh_after_mutation(&mut self) {
        let len = self.visible().len();
        self.current_index = self.clamped_index(len);
        // An edit can empty the sequence or repopulate it; Completed is the
        // only status that sticks.
        if self.status != WizardStatus::Completed {
            self.status = if len == 0 {
                WizardStatus::NoQuestions
            } else {
                WizardStatus::InProgress
            };
        }
    }

    fn clamped_index(&self, visible_len: usize) -> usize {
        if visible_len == 0 {
            0
        } else {
            self.current_index.min(visible_len - 1)
        }
    }
}
