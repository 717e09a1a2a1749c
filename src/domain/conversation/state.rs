//! Session state machine.
//!
//! Drives the outer conversation loop. Transitions are a total function of
//! `(state, event)`, so the loop always makes progress toward `Terminated`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of one chat session.
///
/// - `Greeting`: first prompt not yet sent
/// - `AwaitingInput`: blocked on the transport for the next user line
/// - `Dispatching`: classifying and answering the received line
/// - `FollowUp`: turn handled, "anything else?" prompt pending
/// - `ErrorRecovery`: transport broke, apologise and disconnect
/// - `Terminated`: loop exited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Greeting,
    AwaitingInput,
    Dispatching,
    FollowUp,
    ErrorRecovery,
    Terminated,
}

/// Something that happened while the loop was in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    /// The greeting or follow-up prompt went out.
    PromptSent,
    /// A user line arrived.
    InputReceived,
    /// The transport reported end-of-session.
    InputClosed,
    /// The turn was handled; `done` ends the conversation.
    TurnCompleted { done: bool },
    /// Sending or receiving failed.
    TransportFailed,
    /// Error recovery finished its best-effort apology.
    Recovered,
}

impl SessionState {
    /// Applies an event. Events that make no sense in the current state are
    /// treated as failures.
    pub fn on(self, event: SessionEvent) -> Self {
        use SessionEvent::*;
        use SessionState::*;
        match (self, event) {
            (Terminated, _) => Terminated,
            (ErrorRecovery, _) => Terminated,
            (Greeting | FollowUp, PromptSent) => AwaitingInput,
            (AwaitingInput, InputReceived) => Dispatching,
            (AwaitingInput | Dispatching, InputClosed) => Terminated,
            (Dispatching, TurnCompleted { done: true }) => Terminated,
            (Dispatching, TurnCompleted { done: false }) => FollowUp,
            (_, _) => ErrorRecovery,
        }
    }
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            Greeting => vec![AwaitingInput, ErrorRecovery],
            AwaitingInput => vec![Dispatching, Terminated, ErrorRecovery],
            Dispatching => vec![FollowUp, Terminated, ErrorRecovery],
            FollowUp => vec![AwaitingInput, ErrorRecovery],
            ErrorRecovery => vec![Terminated],
            Terminated => vec![],
        }
    }
}
