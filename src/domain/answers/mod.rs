//! Answers module - Captured answer values and the session answer store.

mod store;
mod value;

pub use store::AnswerStore;
pub use value::{AnswerValue, DurationSpan, DurationUnit, Frequency, Meridiem, PerPeriod, TimeOfDay, YesNo};
