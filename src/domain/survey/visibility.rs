//! Visibility resolver - derives the live question subsequence.

use crate::domain::answers::AnswerStore;
use crate::domain::catalog::{Catalog, QuestionDef};

use super::validation::is_answered;

/// Computes the ordered subsequence of catalog questions currently eligible
/// for presentation.
///
/// Pure function, recomputed from scratch on every call so it always
/// reflects the latest store. A question is included iff every predicate it
/// carries passes:
///
/// 1. `depends_on` - the referenced answer must equal the expected value
///    (absent answer excludes the question),
/// 2. `depends_on_answered` - the referenced question must currently
///    validate as answered; an id not found in the catalog is treated as
///    satisfied,
/// 3. `optional_if` - the question is excluded outright when the referenced
///    answer matches, regardless of its own answer state.
///
/// Catalog order is preserved; the result is the sequence the wizard steps
/// through.
pub fn compute_visible<'a>(catalog: &'a Catalog, answers: &AnswerStore) -> Vec<&'a QuestionDef> {
    catalog
        .questions()
        .iter()
        .filter(|q| is_visible(catalog, q, answers))
        .collect()
}

fn is_visible(catalog: &Catalog, question: &QuestionDef, answers: &AnswerStore) -> bool {
    if let Some(dep) = &question.depends_on {
        let matched = answers
            .get(&dep.id)
            .is_some_and(|v| v.matches_choice(&dep.equals));
        if !matched {
            return false;
        }
    }

    if let Some(target) = &question.depends_on_answered {
        // Unknown target: treat as satisfied. Catalog construction rejects
        // such references, so this branch only fires for hand-built defs.
        if let Some(referenced) = catalog.find(target) {
            if !is_answered(referenced, answers) {
                return false;
            }
        }
    }

    if let Some(opt) = &question.optional_if {
        let matched = answers
            .get(&opt.id)
            .is_some_and(|v| v.matches_choice(&opt.equals));
        if matched {
            return false;
        }
    }

    true
}
