//! Session Transport Port - bidirectional text channel to one user.
//!
//! The hosting session manager owns the connection lifecycle; the
//! facilitator only sends, receives and finally disconnects.

use async_trait::async_trait;
use thiserror::Error;

/// Port for the raw message channel of a single session.
///
/// Implementations are owned by exactly one facilitator, hence `&mut self`
/// and no `Sync` bound. After `disconnect` no further calls are valid.
#[async_trait]
pub trait SessionTransport: Send {
    /// Sends one text message to the user.
    async fn send(&mut self, text: &str) -> Result<(), TransportError>;

    /// Waits for the next user message.
    ///
    /// Returns `Ok(None)` when the user ended the session.
    async fn receive(&mut self) -> Result<Option<String>, TransportError>;

    /// Closes the channel.
    async fn disconnect(&mut self) -> Result<(), TransportError>;
}

/// Transport-level failures. Always fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Transport already closed")]
    Closed,

    #[error("Failed to send message: {0}")]
    SendFailed(String),

    #[error("Failed to receive message: {0}")]
    ReceiveFailed(String),
}
