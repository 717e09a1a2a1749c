//! Maintenance request subflow.
//!
//! Asks the agent's questions one per turn. A "yes" to the emergency
//! question escalates immediately and files nothing. Once the agent runs
//! out of questions the draft becomes a ticket.

use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::maintenance::{
    reports_emergency, SubflowEvent, SubflowOutcome, SubflowState, TicketError,
};
use crate::ports::{CollaboratorError, SessionTransport, TransportError};

use super::Facilitator;

/// Failure inside the maintenance subflow.
///
/// `Transport` escapes to the session loop; the others are answered with
/// an apology and end the subflow.
#[derive(Debug, Error)]
pub enum SubflowError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Maintenance agent failed: {0}")]
    Agent(#[from] CollaboratorError),

    #[error("Ticket could not be built: {0}")]
    Ticket(#[from] TicketError),

    #[error("Ticket could not be stored: {0}")]
    Store(#[from] DomainError),
}

impl SubflowError {
    /// Returns true if the failure happened while filing the ticket.
    pub fn is_ticket_failure(&self) -> bool {
        matches!(self, Self::Ticket(_) | Self::Store(_))
    }
}

impl<T: SessionTransport> Facilitator<T> {
    /// Runs the subflow and contains every non-transport failure.
    pub(super) async fn run_maintenance(&mut self) -> Result<SubflowOutcome, TransportError> {
        self.subflow = SubflowState::default();

        match self.maintenance_dialog().await {
            Ok(outcome) => Ok(outcome),
            Err(SubflowError::Transport(err)) => Err(err),
            Err(err) => {
                tracing::error!(error = %err, state = ?self.subflow, "Maintenance request failed");
                self.step(SubflowEvent::Failed);

                let apology = if err.is_ticket_failure() {
                    self.settings.messages.ticket_apology.clone()
                } else {
                    self.settings.messages.request_apology.clone()
                };
                self.say(&apology).await?;
                Ok(SubflowOutcome::Failed)
            }
        }
    }

    async fn maintenance_dialog(&mut self) -> Result<SubflowOutcome, SubflowError> {
        self.agent.begin().await?;

        loop {
            let Some(question) = self.agent.next_question().await? else {
                self.step(SubflowEvent::NoMoreQuestions);
                let ticket_id = self.submit_ticket().await?;

                let confirmation = self.settings.messages.ticket_confirmation.clone();
                self.say(&confirmation).await?;
                self.step(SubflowEvent::Submitted);
                return Ok(SubflowOutcome::Submitted(ticket_id));
            };

            self.say(&question.text).await?;
            self.step(SubflowEvent::QuestionAsked);

            let Some(answer) = self.listen().await? else {
                self.step(SubflowEvent::InputClosed);
                tracing::info!(field = %question.field, "Input ended during maintenance request");
                return Ok(SubflowOutcome::InputClosed);
            };

            if reports_emergency(&question.field, &answer) {
                self.step(SubflowEvent::EmergencyReported);
                tracing::warn!("Tenant reported an emergency, escalating");

                let escalation = self.settings.messages.emergency_escalation.clone();
                self.say(&escalation).await?;
                self.step(SubflowEvent::Escalated);
                return Ok(SubflowOutcome::Escalated);
            }

            self.agent.handle_answer(&question.field, &answer).await?;
            self.step(SubflowEvent::AnswerRecorded);
        }
    }

    fn step(&mut self, event: SubflowEvent) {
        let next = self.subflow.on(event);
        tracing::trace!(from = ?self.subflow, to = ?next, event = ?event, "Subflow state changed");
        self.subflow = next;
    }
}
