//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `WizardRepository` - storage for in-flight wizard sessions
//! - `ResultsSink` - the results collaborator that receives the completed
//!   answer set

mod results_sink;
mod wizard_repository;

pub use results_sink::ResultsSink;
pub use wizard_repository::WizardRepository;
