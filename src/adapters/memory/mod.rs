//! In-memory adapters.

mod results_sink;
mod wizard_repository;

pub use results_sink::InMemoryResultsSink;
pub use wizard_repository::InMemoryWizardRepository;
