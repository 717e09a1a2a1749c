//! Scripted questionnaire agent.
//!
//! Walks a fixed list of questions in order and records every non-blank
//! answer in a [`TicketDraft`]. Stands in for a model-driven agent that
//! would pick follow-up questions from earlier answers.

use async_trait::async_trait;

use crate::domain::maintenance::{TicketDraft, TicketField};
use crate::ports::{CollaboratorError, MaintenanceAgent, Question};

const SERVICE: &str = "maintenance_agent";

/// `MaintenanceAgent` backed by a fixed question script.
#[derive(Debug, Clone)]
pub struct QuestionnaireAgent {
    questions: Vec<Question>,
    cursor: usize,
    draft: TicketDraft,
}

impl QuestionnaireAgent {
    /// Creates an agent asking `questions` in order.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            cursor: 0,
            draft: TicketDraft::new(),
        }
    }

    /// The question waiting for an answer, if any.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Answers recorded so far.
    pub fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.draft = TicketDraft::new();
    }
}

impl Default for QuestionnaireAgent {
    /// Emergency is asked right after the issue so escalation happens before
    /// the scoring questions.
    fn default() -> Self {
        Self::with_questions(vec![
            Question::new(
                TicketField::IssueDetail,
                "Please describe the issue you are having.",
            ),
            Question::new(
                TicketField::Emergency,
                "Is this an emergency, such as a fire, flood, gas leak or someone in danger? (yes/no)",
            ),
            Question::new(TicketField::Duration, "How long has this been going on?"),
            Question::new(
                TicketField::Severity,
                "On a scale of 0 to 10, how severe is the problem?",
            ),
            Question::new(
                TicketField::Urgency,
                "On a scale of 0 to 10, how urgently does it need attention?",
            ),
            Question::new(
                TicketField::IssueArea,
                "Where in the unit is the issue? (for example kitchen, bathroom, bedroom)",
            ),
            Question::new(
                TicketField::AdditionalDetails,
                "Anything else the maintenance team should know, such as access instructions?",
            ),
        ])
    }
}

#[async_trait]
impl MaintenanceAgent for QuestionnaireAgent {
    async fn begin(&mut self) -> Result<(), CollaboratorError> {
        self.reset();
        Ok(())
    }

    async fn next_question(&mut self) -> Result<Option<Question>, CollaboratorError> {
        Ok(self.current().cloned())
    }

    async fn handle_answer(
        &mut self,
        field: &TicketField,
        answer: &str,
    ) -> Result<(), CollaboratorError> {
        let expected = self.current().map(|question| question.field.clone());
        match expected {
            Some(expected) if expected == *field => {
                let answer = answer.trim();
                if !answer.is_empty() {
                    self.draft.record(expected, answer);
                }
                self.cursor += 1;
                Ok(())
            }
            Some(expected) => Err(CollaboratorError::rejected(
                SERVICE,
                format!("expected an answer for '{}', got '{}'", expected, field),
            )),
            None => Err(CollaboratorError::rejected(
                SERVICE,
                format!("no question pending, got an answer for '{}'", field),
            )),
        }
    }

    async fn finalize(&mut self) -> Result<TicketDraft, CollaboratorError> {
        let draft = std::mem::take(&mut self.draft);
        self.cursor = 0;
        Ok(draft)
    }
}
