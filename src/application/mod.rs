//! Application layer - Session orchestration.
//!
//! Coordinates the conversation domain with the ports: one `Facilitator`
//! per connected tenant.

pub mod facilitator;

pub use facilitator::{
    Collaborators, Facilitator, FacilitatorSettings, Session, SessionEnding, SessionSummary,
    SubflowError,
};
