//! WebSocket message types for the tenant chat.
//!
//! Defines the protocol between server and connected clients:
//! - Server → Client: connection status, chat text, pongs
//! - Client → Server: chat text, pings
//!
//! Clients that do not speak JSON may send bare text frames; those are
//! read as chat lines.

use serde::{Deserialize, Serialize};

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session opened.
    Connected(ConnectedMessage),

    /// One line from the agent.
    Message(ChatText),

    /// Heartbeat response.
    Pong(PongMessage),
}

/// Sent once when the socket is upgraded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub session_id: String,
    pub timestamp: String,
}

/// Chat text in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatText {
    pub text: String,
}

/// Heartbeat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PongMessage {
    pub timestamp: String,
}

impl ServerMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Message(ChatText { text: text.into() })
    }
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be received from client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// One line from the tenant.
    Message(ChatText),

    /// Heartbeat request.
    Ping,
}

impl ClientMessage {
    /// Reads a text frame. Anything that is not a protocol message is a
    /// chat line as typed.
    pub fn from_frame(frame: &str) -> Self {
        serde_json::from_str(frame).unwrap_or_else(|_| {
            Self::Message(ChatText {
                text: frame.to_string(),
            })
        })
    }
}
