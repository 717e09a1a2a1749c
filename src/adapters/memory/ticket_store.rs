//! In-memory ticket store.
//!
//! Backs the server when no database is configured and lets tests inspect
//! exactly which tickets were created.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::maintenance::Ticket;
use crate::ports::TicketStore;

/// `TicketStore` keeping tickets in a vector.
///
/// Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketStore {
    tickets: Arc<RwLock<Vec<Ticket>>>,
    create_calls: Arc<AtomicUsize>,
    failure: Option<String>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every `create` fails with a database error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Snapshot of stored tickets in creation order.
    pub async fn tickets(&self) -> Vec<Ticket> {
        self.tickets.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.tickets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tickets.read().await.is_empty()
    }

    /// Number of `create` calls, successful or not.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn create(&self, ticket: &Ticket) -> Result<(), DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(DomainError::new(ErrorCode::DatabaseError, message.clone()));
        }

        let mut tickets = self.tickets.write().await;
        if tickets.iter().any(|stored| stored.id() == ticket.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateTicket,
                format!("Ticket already exists: {}", ticket.id()),
            ));
        }
        tickets.push(ticket.clone());
        Ok(())
    }
}
