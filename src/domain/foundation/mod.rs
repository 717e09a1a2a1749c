//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types and the state machine
//! contract that form the vocabulary of the Tenant Desk domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SessionId, TicketId, UnitId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
