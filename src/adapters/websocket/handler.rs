//! WebSocket upgrade handler for tenant chat sessions.
//!
//! Handles the HTTP → WebSocket upgrade and hands the connection to a
//! facilitator:
//! 1. Validate the tenant id from the path
//! 2. Upgrade to WebSocket
//! 3. Announce the session id
//! 4. Run the facilitator until it disconnects

use std::sync::Arc;

use axum::{
    extract::{ws::WebSocket, Path, State, WebSocketUpgrade},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::application::facilitator::{Collaborators, Facilitator, FacilitatorSettings, Session};
use crate::domain::foundation::{SessionId, UserId};
use crate::ports::MaintenanceAgent;
use crate::telemetry;

use super::transport::WebSocketTransport;

/// Builds a fresh questionnaire agent for each session.
pub type AgentFactory = Arc<dyn Fn() -> Box<dyn MaintenanceAgent> + Send + Sync>;

/// State shared by every chat connection.
#[derive(Clone)]
pub struct ChatState {
    pub collaborators: Collaborators,
    pub agent_factory: AgentFactory,
    pub settings: Arc<FacilitatorSettings>,
}

impl ChatState {
    pub fn new(
        collaborators: Collaborators,
        agent_factory: AgentFactory,
        settings: FacilitatorSettings,
    ) -> Self {
        Self {
            collaborators,
            agent_factory,
            settings: Arc::new(settings),
        }
    }
}

/// Handle WebSocket upgrade requests for a tenant chat.
///
/// Route: `GET /sessions/:user_id/chat`
///
/// The tenant id is taken from the path as-is; authentication belongs to
/// the hosting gateway.
pub async fn chat_handler(
    ws: WebSocketUpgrade,
    Path(user_id): Path<String>,
    State(state): State<ChatState>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    ws.on_upgrade(move |socket| handle_socket(socket, user_id, state))
}

async fn handle_socket(socket: WebSocket, user_id: UserId, state: ChatState) {
    let mut transport = WebSocketTransport::new(socket);
    let session_id = SessionId::new();
    let span = telemetry::session_span(&session_id, &user_id);

    if let Err(e) = transport.announce(&session_id).await {
        tracing::debug!(parent: &span, "Failed to send connected message: {}", e);
        return;
    }

    let session = Session::with_id(session_id, user_id, transport);
    let facilitator = Facilitator::new(
        session,
        state.collaborators.clone(),
        (state.agent_factory)(),
        state.settings.as_ref().clone(),
        span,
    );

    let summary = facilitator.run().await;
    tracing::debug!(
        session_id = %summary.session_id,
        turns = summary.turns,
        "Chat connection closed"
    );
}

/// Router exposing the chat endpoint.
pub fn chat_router(state: ChatState) -> Router {
    Router::new()
        .route("/sessions/:user_id/chat", get(chat_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::language::{
        CannedResponseGenerator, KeywordIntentClassifier, PassthroughHumanizer,
    };
    use crate::adapters::maintenance::QuestionnaireAgent;
    use crate::adapters::memory::InMemoryTicketStore;

    fn state() -> ChatState {
        let collaborators = Collaborators {
            classifier: Arc::new(KeywordIntentClassifier::default()),
            responses: Arc::new(CannedResponseGenerator::default()),
            humanizer: Arc::new(PassthroughHumanizer),
            tickets: Arc::new(InMemoryTicketStore::new()),
        };
        let factory: AgentFactory =
            Arc::new(|| Box::new(QuestionnaireAgent::default()) as Box<dyn MaintenanceAgent>);
        ChatState::new(collaborators, factory, FacilitatorSettings::default())
    }

    #[tokio::test]
    async fn factory_builds_independent_agents() {
        let state = state();
        let mut first = (state.agent_factory)();
        let mut second = (state.agent_factory)();

        let question = first.next_question().await.unwrap().unwrap();
        first.handle_answer(&question.field, "Leak").await.unwrap();

        let untouched = second.next_question().await.unwrap().unwrap();
        assert_eq!(untouched.field, question.field);
    }

    #[test]
    fn router_builds_with_state() {
        let _router = chat_router(state());
    }
}
