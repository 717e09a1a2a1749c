//! Maintenance Agent Port - the questionnaire behind the subflow.
//!
//! The agent decides which field to ask next and how answers are stored.
//! The facilitator drives it one question at a time and owns the control
//! flow (emergency escalation, finalization, error containment).

use async_trait::async_trait;

use crate::domain::maintenance::{TicketDraft, TicketField};

use super::CollaboratorError;

/// The next thing the agent wants to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub field: TicketField,
    pub text: String,
}

impl Question {
    pub fn new(field: TicketField, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }
}

/// Port for the stateful questionnaire agent.
///
/// One agent instance belongs to one facilitator.
#[async_trait]
pub trait MaintenanceAgent: Send {
    /// Discards any previous draft and starts a new questionnaire.
    async fn begin(&mut self) -> Result<(), CollaboratorError>;

    /// Returns the next unanswered question, or `None` once the draft is
    /// complete.
    async fn next_question(&mut self) -> Result<Option<Question>, CollaboratorError>;

    /// Records the tenant's answer for `field`.
    async fn handle_answer(
        &mut self,
        field: &TicketField,
        answer: &str,
    ) -> Result<(), CollaboratorError>;

    /// Hands over the collected draft.
    async fn finalize(&mut self) -> Result<TicketDraft, CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn MaintenanceAgent) {}

    #[test]
    fn question_new_accepts_str() {
        let question = Question::new(TicketField::Duration, "How long?");
        assert_eq!(question.field, TicketField::Duration);
        assert_eq!(question.text, "How long?");
    }
}
