//! Catalog module - Question definitions and the ordered question catalog.
//!
//! The catalog is fixed, read-only configuration: an ordered list of typed
//! question definitions with visibility predicates. All cross-references are
//! validated at construction time; a malformed catalog is a configuration
//! error, never a runtime condition.

mod catalog;
mod question;
mod sleepfit;

pub use catalog::{Catalog, CatalogError};
pub use question::{DependsOn, OptionalIf, QuestionDef, QuestionType};
pub use sleepfit::sleepfit_catalog;
