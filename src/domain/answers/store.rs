//! AnswerStore - the session's mapping of question id to captured value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Age, QuestionId};

use super::AnswerValue;

/// Per-session answer storage.
///
/// Holds one reserved slot for the subject's age, collected before the
/// questionnaire begins, plus a map of question id to captured value.
/// Writes are last-write-wins per id; answers are never deleted during a
/// session. The whole store is handed to the results collaborator at
/// completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerStore {
    /// Immutable session input from the entry step, `None` only when the
    /// store was created without one (the wizard refuses such a store).
    age: Option<Age>,
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerStore {
    /// Creates an empty store with no age.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the subject's age.
    pub fn with_age(age: Age) -> Self {
        Self {
            age: Some(age),
            answers: BTreeMap::new(),
        }
    }

    /// Returns the subject's age, if seeded.
    pub fn age(&self) -> Option<Age> {
        self.age
    }

    /// Returns the stored answer for a question id.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    /// Stores an answer, overwriting any previous value for the id.
    pub fn set(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }

    /// Returns true if the question has any stored value, complete or not.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    /// Number of stored answers (age not counted).
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no question answers have been stored.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates stored answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::YesNo;

    fn age(years: i32) -> Age {
        Age::new(years).unwrap()
    }

    #[test]
    fn new_store_has_no_age_and_no_answers() {
        let store = AnswerStore::new();
        assert_eq!(store.age(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn with_age_seeds_the_reserved_slot() {
        let store = AnswerStore::with_age(age(23));
        assert_eq!(store.age().unwrap().years(), 23);
        assert!(store.is_empty());
    }

    #[test]
    fn set_is_last_write_wins() {
        let mut store = AnswerStore::with_age(age(23));
        store.set("work".into(), AnswerValue::yes_no(YesNo::Yes));
        store.set("work".into(), AnswerValue::yes_no(YesNo::No));

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&"work".into()),
            Some(&AnswerValue::yes_no(YesNo::No))
        );
    }

    #[test]
    fn contains_reports_partial_answers_too() {
        let mut store = AnswerStore::with_age(age(23));
        store.set("notes".into(), AnswerValue::text(""));
        assert!(store.contains(&"notes".into()));
        assert!(!store.contains(&"work".into()));
    }

    #[test]
    fn iter_yields_answers_in_stable_order() {
        let mut store = AnswerStore::with_age(age(23));
        store.set("b".into(), AnswerValue::text("2"));
        store.set("a".into(), AnswerValue::text("1"));

        let ids: Vec<&str> = store.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn store_round_trips_through_json() {
        let mut store = AnswerStore::with_age(age(30));
        store.set("work".into(), AnswerValue::yes_no(YesNo::No));

        let json = serde_json::to_string(&store).unwrap();
        let back: AnswerStore = serde_json::from_str(&json).unwrap();
        assert_eq!(store, back);
    }
}
