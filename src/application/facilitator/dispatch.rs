//! Intent dispatch for one user line.

use crate::domain::conversation::Intent;
use crate::ports::{SessionTransport, TransportError};

use super::Facilitator;

/// How a handled turn leaves the outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TurnOutcome {
    /// Ask the follow-up prompt and keep listening.
    Continue,
    /// The tenant said goodbye; the reply already went out.
    Done,
    /// Input ended inside the maintenance subflow.
    InputClosed,
}

impl<T: SessionTransport> Facilitator<T> {
    /// Classifies `line`, answers it and reports whether the session goes on.
    ///
    /// Only transport errors escape; collaborator failures become the
    /// request apology.
    pub(super) async fn handle_turn(&mut self, line: &str) -> Result<TurnOutcome, TransportError> {
        let intent = match self.collaborators.classifier.classify(line).await {
            Ok(label) => Intent::from_label(&label),
            Err(err) => {
                tracing::error!(error = %err, service = err.service(), "Intent classification failed");
                let apology = self.settings.messages.request_apology.clone();
                self.say(&apology).await?;
                return Ok(TurnOutcome::Continue);
            }
        };
        tracing::debug!(intent = %intent, "Classified user input");

        if intent == Intent::MaintenanceRequest {
            let outcome = self.run_maintenance().await?;
            return Ok(if outcome.closes_session() {
                TurnOutcome::InputClosed
            } else {
                TurnOutcome::Continue
            });
        }

        let (reply, done) = self.reply_for(&intent).await;
        self.say(&reply).await?;
        Ok(if done {
            TurnOutcome::Done
        } else {
            TurnOutcome::Continue
        })
    }

    /// Canned reply for a non-maintenance intent and whether it ends the
    /// session. A generator failure never ends the session.
    async fn reply_for(&mut self, intent: &Intent) -> (String, bool) {
        match self.collaborators.responses.generate(intent.label()).await {
            Ok(text) => (text, intent.ends_session()),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    intent = %intent,
                    "Response generation failed"
                );
                (self.settings.messages.request_apology.clone(), false)
            }
        }
    }
}
