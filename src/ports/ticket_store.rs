//! Ticket Store Port - persistence of finalized tickets.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::maintenance::Ticket;

/// Port for storing maintenance tickets.
///
/// Shared by all sessions; implementations must tolerate concurrent
/// `create` calls. A ticket is created once and never updated.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Persists a new ticket.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on storage failure
    /// - `DuplicateTicket` if a ticket with the same id exists
    async fn create(&self, ticket: &Ticket) -> Result<(), DomainError>;
}
