//! Catalog - the ordered, validated question list.

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::foundation::QuestionId;

use super::question::QuestionDef;

/// Configuration errors detected when constructing a catalog.
///
/// These indicate a malformed question list and fail construction; they are
/// never recovered from at runtime.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("duplicate question id '{id}'")]
    DuplicateId { id: QuestionId },

    #[error("question '{id}' ({predicate}) references '{target}', which does not appear earlier in the catalog")]
    ForwardReference {
        id: QuestionId,
        predicate: &'static str,
        target: QuestionId,
    },
}

/// Fixed, ordered question catalog.
///
/// # Invariants
///
/// - Question ids are unique.
/// - Every `depends_on` / `depends_on_answered` / `optional_if` target
///   references a question strictly earlier in the list (no forward or
///   cyclic references, no self-references).
///
/// Catalog order is total and never changes after construction; the visible
/// sequence the wizard steps through is always a subsequence of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<QuestionDef>,
}

impl Catalog {
    /// Builds a catalog, validating all cross-references.
    pub fn new(questions: Vec<QuestionDef>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<QuestionId> = HashSet::new();

        for q in &questions {
            if let Some(dep) = &q.depends_on {
                Self::check_backward(&seen, q, "depends_on", &dep.id)?;
            }
            if let Some(target) = &q.depends_on_answered {
                Self::check_backward(&seen, q, "depends_on_answered", target)?;
            }
            if let Some(opt) = &q.optional_if {
                Self::check_backward(&seen, q, "optional_if", &opt.id)?;
            }

            if !seen.insert(q.id.clone()) {
                return Err(CatalogError::DuplicateId { id: q.id.clone() });
            }
        }

        Ok(Self { questions })
    }

    fn check_backward(
        seen: &HashSet<QuestionId>,
        q: &QuestionDef,
        predicate: &'static str,
        target: &QuestionId,
    ) -> Result<(), CatalogError> {
        if seen.contains(target) {
            Ok(())
        } else {
            Err(CatalogError::ForwardReference {
                id: q.id.clone(),
                predicate,
                target: target.clone(),
            })
        }
    }

    /// Returns all questions in catalog order.
    pub fn questions(&self) -> &[QuestionDef] {
        &self.questions
    }

    /// Finds a question definition by id.
    pub fn find(&self, id: &QuestionId) -> Option<&QuestionDef> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Returns true if a question with this id exists.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.find(id).is_some()
    }

    /// Returns the 0-based catalog position of a question id.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    /// Number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the catalog has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionType;

    fn yesno(id: &str) -> QuestionDef {
        QuestionDef::new(id, "Test", QuestionType::YesNo, "?")
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn backward_references_are_accepted() {
        let catalog = Catalog::new(vec![
            yesno("work"),
            yesno("sleep_weekend_diff").depends_on("work", "No"),
            yesno("sleep_weekend_bedtime").optional_if("sleep_weekend_diff", "No"),
            yesno("followup").depends_on_answered("work"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn duplicate_id_fails_construction() {
        let err = Catalog::new(vec![yesno("work"), yesno("work")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn forward_depends_on_fails_construction() {
        let err = Catalog::new(vec![
            yesno("a").depends_on("b", "Yes"),
            yesno("b"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::ForwardReference { predicate: "depends_on", .. }));
    }

    #[test]
    fn forward_depends_on_answered_fails_construction() {
        let err = Catalog::new(vec![
            yesno("a").depends_on_answered("later"),
            yesno("later"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ForwardReference { predicate: "depends_on_answered", .. }
        ));
    }

    #[test]
    fn self_reference_fails_construction() {
        // A self-reference is a cycle of length one.
        let err = Catalog::new(vec![yesno("a").optional_if("a", "Yes")]).unwrap_err();
        assert!(matches!(err, CatalogError::ForwardReference { predicate: "optional_if", .. }));
    }

    #[test]
    fn unknown_target_fails_construction() {
        let err = Catalog::new(vec![yesno("a").depends_on("missing", "Yes")]).unwrap_err();
        assert!(matches!(err, CatalogError::ForwardReference { .. }));
    }

    #[test]
    fn find_and_position_locate_questions() {
        let catalog = Catalog::new(vec![yesno("work"), yesno("other")]).unwrap();
        assert_eq!(catalog.position(&"other".into()), Some(1));
        assert_eq!(catalog.find(&"work".into()).unwrap().id.as_str(), "work");
        assert!(!catalog.contains(&"missing".into()));
    }

    #[test]
    fn error_message_names_question_and_target() {
        let err = Catalog::new(vec![yesno("a").depends_on("b", "Yes"), yesno("b")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "question 'a' (depends_on) references 'b', which does not appear earlier in the catalog"
        );
    }
}
