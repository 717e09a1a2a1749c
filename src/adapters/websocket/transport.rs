//! SessionTransport over an axum WebSocket.

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{SessionTransport, TransportError};

use super::messages::{ClientMessage, ConnectedMessage, PongMessage, ServerMessage};

/// What a received frame means for the facilitator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Inbound {
    Line(String),
    Ping,
    Skip,
    Closed,
}

impl Inbound {
    pub(crate) fn from_frame(frame: Message) -> Self {
        match frame {
            Message::Text(text) => match ClientMessage::from_frame(&text) {
                ClientMessage::Message(chat) => Self::Line(chat.text),
                ClientMessage::Ping => Self::Ping,
            },
            Message::Close(_) => Self::Closed,
            // Protocol-level ping/pong is answered by axum
            Message::Ping(_) | Message::Pong(_) => Self::Skip,
            Message::Binary(_) => {
                tracing::warn!("Received unsupported binary message");
                Self::Skip
            }
        }
    }
}

/// A tenant's WebSocket connection.
pub struct WebSocketTransport {
    socket: WebSocket,
    closed: bool,
}

impl WebSocketTransport {
    pub fn new(socket: WebSocket) -> Self {
        Self {
            socket,
            closed: false,
        }
    }

    /// Sends the `connected` frame announcing the session.
    pub async fn announce(&mut self, session_id: &SessionId) -> Result<(), TransportError> {
        self.send_frame(&ServerMessage::Connected(ConnectedMessage {
            session_id: session_id.to_string(),
            timestamp: now_rfc3339(),
        }))
        .await
    }

    async fn send_frame(&mut self, msg: &ServerMessage) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        let json = serde_json::to_string(msg)
            .map_err(|e| TransportError::SendFailed(format!("encode: {}", e)))?;
        self.socket
            .send(Message::Text(json))
            .await
            .map_err(|e| TransportError::SendFailed(e.to_string()))
    }
}

#[async_trait]
impl SessionTransport for WebSocketTransport {
    async fn send(&mut self, text: &str) -> Result<(), TransportError> {
        self.send_frame(&ServerMessage::text(text)).await
    }

    async fn receive(&mut self) -> Result<Option<String>, TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        loop {
            let frame = match self.socket.recv().await {
                Some(Ok(frame)) => frame,
                Some(Err(e)) => return Err(TransportError::ReceiveFailed(e.to_string())),
                None => return Ok(None),
            };
            match Inbound::from_frame(frame) {
                Inbound::Line(line) => return Ok(Some(line)),
                Inbound::Closed => {
                    tracing::debug!("Client sent close frame");
                    return Ok(None);
                }
                Inbound::Ping => {
                    let pong = ServerMessage::Pong(PongMessage {
                        timestamp: now_rfc3339(),
                    });
                    self.send_frame(&pong).await?;
                }
                Inbound::Skip => {}
            }
        }
    }

    async fn disconnect(&mut self) -> Result<(), TransportError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.socket
            .send(Message::Close(None))
            .await
            .map_err(|e| TransportError::SendFailed(e.to_string()))
    }
}

fn now_rfc3339() -> String {
    Timestamp::now().as_datetime().to_rfc3339()
}
