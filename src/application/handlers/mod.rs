//! Command handlers.
//!
//! Each handler owns one interaction with a session: start, answer, move
//! forward, move back, read. Handlers are the only writers of the answer
//! store, and each invocation runs to completion before the next is
//! accepted, so the engine needs no locking of its own.

mod advance;
mod get_survey_view;
mod retreat;
mod start_session;
mod submit_answer;

pub use advance::{AdvanceCommand, AdvanceError, AdvanceHandler, AdvanceResult};
pub use get_survey_view::{GetSurveyViewError, GetSurveyViewHandler, GetSurveyViewQuery};
pub use retreat::{RetreatCommand, RetreatError, RetreatHandler, RetreatResult};
pub use start_session::{StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerError, SubmitAnswerHandler, SubmitAnswerResult};
