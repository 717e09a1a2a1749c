//! Maintenance domain module.
//!
//! Everything the questionnaire produces: field keys, the draft of answers,
//! the priority rule, the finalized ticket and the subflow state machine.

mod draft;
mod field;
mod priority;
mod subflow;
mod ticket;

pub use draft::TicketDraft;
pub use field::{is_affirmative, reports_emergency, TicketField};
pub use priority::{Priority, HIGH_PRIORITY_THRESHOLD, MEDIUM_PRIORITY_THRESHOLD};
pub use subflow::{SubflowEvent, SubflowOutcome, SubflowState};
pub use ticket::{Ticket, TicketError, TicketOwner, TicketPolicy};
