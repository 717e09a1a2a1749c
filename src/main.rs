//! Tenant Desk server
//!
//! Serves the tenant chat over WebSocket at `/sessions/:user_id/chat`.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use tenant_desk::adapters::language::{
    CannedResponseGenerator, KeywordIntentClassifier, PassthroughHumanizer,
};
use tenant_desk::adapters::maintenance::QuestionnaireAgent;
use tenant_desk::adapters::memory::InMemoryTicketStore;
use tenant_desk::adapters::postgres::PostgresTicketStore;
use tenant_desk::adapters::websocket::{chat_router, AgentFactory, ChatState};
use tenant_desk::application::{Collaborators, FacilitatorSettings};
use tenant_desk::config::AppConfig;
use tenant_desk::ports::{MaintenanceAgent, TicketStore};
use tenant_desk::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    tracing::info!(
        environment = ?config.server.environment,
        "Starting Tenant Desk"
    );

    let tickets: Arc<dyn TicketStore> = match &config.database {
        Some(database) => {
            let store = PostgresTicketStore::connect(database).await?;
            if database.run_migrations {
                store.migrate(&database.migrations_dir).await?;
            }
            Arc::new(store)
        }
        None => {
            tracing::warn!("No database configured, tickets are kept in memory");
            Arc::new(InMemoryTicketStore::new())
        }
    };

    let collaborators = Collaborators {
        classifier: Arc::new(KeywordIntentClassifier::default()),
        responses: Arc::new(CannedResponseGenerator::default()),
        humanizer: Arc::new(PassthroughHumanizer),
        tickets,
    };
    let agent_factory: AgentFactory =
        Arc::new(|| Box::new(QuestionnaireAgent::default()) as Box<dyn MaintenanceAgent>);
    let settings = FacilitatorSettings {
        messages: config.messages.clone(),
        tickets: config.tickets.clone(),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(chat_router(ChatState::new(collaborators, agent_factory, settings)))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
