//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the conversation core and its collaborators. Adapters implement these
//! ports.
//!
//! - `SessionTransport` - Text channel to one connected user
//! - `IntentClassifier` / `ResponseGenerator` / `Humanizer` - Language services
//! - `MaintenanceAgent` - Questionnaire that fills a ticket draft
//! - `TicketStore` - Persistence of finalized tickets

mod collaborator_error;
mod language;
mod maintenance_agent;
mod ticket_store;
mod transport;

pub use collaborator_error::CollaboratorError;
pub use language::{Humanizer, IntentClassifier, ResponseGenerator};
pub use maintenance_agent::{MaintenanceAgent, Question};
pub use ticket_store::TicketStore;
pub use transport::{SessionTransport, TransportError};
