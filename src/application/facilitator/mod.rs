//! Facilitator - the per-session conversation driver.
//!
//! Owns one transport and one maintenance agent, greets the tenant and
//! loops receive → classify → dispatch → reply until farewell, end of
//! input or a transport failure. Collaborator failures are contained at
//! three levels:
//!
//! - session: transport errors apologise once and disconnect
//! - dispatch: classifier or generator errors apologise and keep going
//! - subflow: agent, ticket or store errors apologise and return to the
//!   follow-up prompt

mod dispatch;
mod maintenance;
mod messaging;
mod session_loop;
mod ticketing;

use std::sync::Arc;

use tracing::{Instrument, Span};

use crate::domain::conversation::{MessageCatalog, SessionState};
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::maintenance::{SubflowState, TicketPolicy};
use crate::ports::{
    Humanizer, IntentClassifier, MaintenanceAgent, ResponseGenerator, SessionTransport,
    TicketStore,
};

pub use maintenance::SubflowError;

/// One connected tenant and the channel to them.
pub struct Session<T> {
    id: SessionId,
    user_id: UserId,
    transport: T,
}

impl<T: SessionTransport> Session<T> {
    pub fn new(user_id: UserId, transport: T) -> Self {
        Self::with_id(SessionId::new(), user_id, transport)
    }

    pub fn with_id(id: SessionId, user_id: UserId, transport: T) -> Self {
        Self {
            id,
            user_id,
            transport,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Stateless services shared by every session.
#[derive(Clone)]
pub struct Collaborators {
    pub classifier: Arc<dyn IntentClassifier>,
    pub responses: Arc<dyn ResponseGenerator>,
    pub humanizer: Arc<dyn Humanizer>,
    pub tickets: Arc<dyn TicketStore>,
}

/// Texts and ticket defaults a facilitator runs with.
#[derive(Debug, Clone, Default)]
pub struct FacilitatorSettings {
    pub messages: MessageCatalog,
    pub tickets: TicketPolicy,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnding {
    /// The tenant said goodbye.
    Farewell,
    /// The transport reported end of input.
    EndOfInput,
    /// Sending or receiving failed.
    TransportFailure,
}

/// What happened in a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: SessionId,
    /// User lines handled by the outer loop.
    pub turns: usize,
    pub tickets_submitted: usize,
    pub ending: SessionEnding,
}

/// Drives one chat session to completion.
///
/// Every async method takes `&mut self` so the session future stays `Send`
/// while the agent is only `Send`.
pub struct Facilitator<T> {
    session: Session<T>,
    collaborators: Collaborators,
    agent: Box<dyn MaintenanceAgent>,
    settings: FacilitatorSettings,
    span: Span,
    state: SessionState,
    subflow: SubflowState,
    turns: usize,
    tickets_submitted: usize,
}

impl<T: SessionTransport> Facilitator<T> {
    pub fn new(
        session: Session<T>,
        collaborators: Collaborators,
        agent: Box<dyn MaintenanceAgent>,
        settings: FacilitatorSettings,
        span: Span,
    ) -> Self {
        Self {
            session,
            collaborators,
            agent,
            settings,
            span,
            state: SessionState::default(),
            subflow: SubflowState::default(),
            turns: 0,
            tickets_submitted: 0,
        }
    }

    /// Runs the session until it terminates. Never fails; the transport is
    /// disconnected exactly once on every path.
    pub async fn run(mut self) -> SessionSummary {
        let span = self.span.clone();
        let ending = self.drive().instrument(span).await;

        SessionSummary {
            session_id: self.session.id(),
            turns: self.turns,
            tickets_submitted: self.tickets_submitted,
            ending,
        }
    }
}
