//! Outer session loop: prompt, listen, dispatch, repeat.

use crate::domain::conversation::{SessionEvent, SessionState};
use crate::ports::{SessionTransport, TransportError};

use super::dispatch::TurnOutcome;
use super::{Facilitator, SessionEnding};

impl<T: SessionTransport> Facilitator<T> {
    pub(super) async fn drive(&mut self) -> SessionEnding {
        tracing::info!("Session started");

        let ending = loop {
            let prompt = self.prompt();
            if let Err(err) = self.say(&prompt).await {
                break self.recover(err).await;
            }
            self.advance(SessionEvent::PromptSent);

            let line = match self.listen().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.advance(SessionEvent::InputClosed);
                    break self.close(SessionEnding::EndOfInput).await;
                }
                Err(err) => break self.recover(err).await,
            };
            self.advance(SessionEvent::InputReceived);
            self.turns += 1;

            match self.handle_turn(&line).await {
                Ok(TurnOutcome::Continue) => {
                    self.advance(SessionEvent::TurnCompleted { done: false });
                }
                Ok(TurnOutcome::Done) => {
                    self.advance(SessionEvent::TurnCompleted { done: true });
                    break self.close(SessionEnding::Farewell).await;
                }
                Ok(TurnOutcome::InputClosed) => {
                    self.advance(SessionEvent::InputClosed);
                    break self.close(SessionEnding::EndOfInput).await;
                }
                Err(err) => break self.recover(err).await,
            }
        };

        tracing::info!(
            turns = self.turns,
            tickets_submitted = self.tickets_submitted,
            ending = ?ending,
            "Session ended"
        );
        ending
    }

    /// The prompt owed in the current state.
    fn prompt(&self) -> String {
        match self.state {
            SessionState::Greeting => self.settings.messages.greeting.clone(),
            SessionState::FollowUp => self.settings.messages.follow_up.clone(),
            other => {
                tracing::warn!(state = ?other, "Prompting outside a prompt state");
                self.settings.messages.follow_up.clone()
            }
        }
    }

    fn advance(&mut self, event: SessionEvent) {
        let next = self.state.on(event);
        tracing::trace!(from = ?self.state, to = ?next, event = ?event, "Session state changed");
        self.state = next;
    }

    /// Apologises once, best effort, then disconnects.
    async fn recover(&mut self, err: TransportError) -> SessionEnding {
        tracing::error!(error = %err, "Session transport failed");
        self.advance(SessionEvent::TransportFailed);

        let apology = self.settings.messages.session_apology.clone();
        if let Err(send_err) = self.say(&apology).await {
            tracing::debug!(error = %send_err, "Could not deliver session apology");
        }

        self.disconnect().await;
        self.advance(SessionEvent::Recovered);
        SessionEnding::TransportFailure
    }

    async fn close(&mut self, ending: SessionEnding) -> SessionEnding {
        self.disconnect().await;
        ending
    }

    async fn disconnect(&mut self) {
        if let Err(err) = self.session.transport.disconnect().await {
            tracing::warn!(error = %err, "Disconnect failed");
        }
    }
}
