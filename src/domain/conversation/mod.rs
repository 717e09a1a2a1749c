//! Conversation domain module.
//!
//! Intent vocabulary, the outer session state machine and the fixed
//! messages the facilitator speaks.

mod intent;
mod messages;
mod state;

pub use intent::Intent;
pub use messages::MessageCatalog;
pub use state::{SessionEvent, SessionState};
