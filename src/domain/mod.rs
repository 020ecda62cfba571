//! Domain layer - pure questionnaire logic, no I/O.

pub mod answers;
pub mod catalog;
pub mod foundation;
pub mod survey;
