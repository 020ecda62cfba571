//! Survey module - the core questionnaire engine.
//!
//! Three collaborating pieces, all driven by the current answer store:
//!
//! - the answer validator (`is_answered`), the sole gate for forward
//!   navigation,
//! - the visibility resolver (`compute_visible`), which derives the ordered
//!   live subsequence of the catalog,
//! - the `Wizard` aggregate, which tracks the current position and hands the
//!   completed answer set off at the end.

mod validation;
mod visibility;
mod wizard;

pub use validation::is_answered;
pub use visibility::compute_visible;
pub use wizard::{AdvanceOutcome, CompletedSurvey, RetreatOutcome, Wizard, WizardStatus};
