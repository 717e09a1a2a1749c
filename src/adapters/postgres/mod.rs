//! PostgreSQL adapters - Database implementations for persistence ports.
//!
//! - `PostgresTicketStore` - Inserts finalized maintenance tickets

mod ticket_store;

pub use ticket_store::PostgresTicketStore;
