//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the SleepFit domain.

mod age;
mod errors;
mod ids;
mod timestamp;

pub use age::Age;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuestionId, SessionId};
pub use timestamp::Timestamp;
