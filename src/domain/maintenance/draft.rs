//! Answers collected by the maintenance subflow.

use std::collections::BTreeMap;

use super::TicketField;

/// Field answers gathered so far.
///
/// A field is present only once the tenant answered its question. The agent
/// hands the draft over by value when it is finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    answers: BTreeMap<TicketField, String>,
}

impl TicketDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer for a field.
    pub fn record(&mut self, field: TicketField, answer: impl Into<String>) {
        self.answers.insert(field, answer.into());
    }

    /// Builder-style variant of [`record`](Self::record).
    pub fn with_answer(mut self, field: TicketField, answer: impl Into<String>) -> Self {
        self.record(field, answer);
        self
    }

    /// Returns the answer for a field, if given.
    pub fn get(&self, field: &TicketField) -> Option<&str> {
        self.answers.get(field).map(String::as_str)
    }

    /// Returns true if the field was answered.
    pub fn is_answered(&self, field: &TicketField) -> bool {
        self.answers.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates answers in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&TicketField, &str)> {
        self.answers.iter().map(|(field, answer)| (field, answer.as_str()))
    }
}
