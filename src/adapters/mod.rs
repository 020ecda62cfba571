//! Adapters - Implementations of the ports.
//!
//! The system keeps no state beyond the in-memory session, so all adapters
//! live in `memory`.

pub mod memory;

pub use memory::{InMemoryResultsSink, InMemoryWizardRepository};
