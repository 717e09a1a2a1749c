//! Fixed texts the facilitator says on its own behalf.

use serde::Deserialize;

/// Every message the core emits without asking the response generator.
///
/// Loaded from the `messages` configuration section; each field falls back
/// to its default when unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageCatalog {
    /// First prompt of every session.
    pub greeting: String,
    /// Prompt sent after each handled turn that did not end the session.
    pub follow_up: String,
    /// Sent once before disconnecting after a fatal failure.
    pub session_apology: String,
    /// Replaces a reply the collaborators failed to produce.
    pub request_apology: String,
    /// Sent when a ticket cannot be assembled or stored.
    pub ticket_apology: String,
    /// Sent when the tenant reports an emergency.
    pub emergency_escalation: String,
    /// Sent after a ticket was stored.
    pub ticket_confirmation: String,
}

impl MessageCatalog {
    /// Returns the name of the first message that is blank, if any.
    pub fn first_blank(&self) -> Option<&'static str> {
        [
            ("greeting", &self.greeting),
            ("follow_up", &self.follow_up),
            ("session_apology", &self.session_apology),
            ("request_apology", &self.request_apology),
            ("ticket_apology", &self.ticket_apology),
            ("emergency_escalation", &self.emergency_escalation),
            ("ticket_confirmation", &self.ticket_confirmation),
        ]
        .into_iter()
        .find(|(_, text)| text.trim().is_empty())
        .map(|(name, _)| name)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            greeting: "Hello! How can I help you today?".to_string(),
            follow_up: "Is there anything else I can help you with?".to_string(),
            session_apology: "An error occurred. Please try again later.".to_string(),
            request_apology: "An error occurred while processing your request. Please try again."
                .to_string(),
            ticket_apology: "An error occurred while creating the ticket. Please try again."
                .to_string(),
            emergency_escalation: "Call 911 now.".to_string(),
            ticket_confirmation: "Sending your maintenance request now.".to_string(),
        }
    }
}
