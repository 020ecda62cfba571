//! Application layer - command handlers and read models.

pub mod handlers;
mod view;

pub use view::{QuestionView, SurveyView};
