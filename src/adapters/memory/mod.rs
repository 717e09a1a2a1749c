//! In-memory adapters for local runs and tests.

mod scripted_transport;
mod ticket_store;

pub use scripted_transport::ScriptedTransport;
pub use ticket_store::InMemoryTicketStore;
