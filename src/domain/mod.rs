//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `conversation` - Intents, session state machine, fixed messages
//! - `maintenance` - Questionnaire fields, ticket draft, priority, ticket assembly

pub mod conversation;
pub mod foundation;
pub mod maintenance;
