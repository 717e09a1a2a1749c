//! WebSocket adapters for tenant chat sessions.
//!
//! Each connection becomes one facilitator session:
//!
//! ```text
//! client ──upgrade──► chat_handler ──► WebSocketTransport ──► Facilitator
//!        ◄─────────── {"type":"message","text":...} frames ◄──┘
//! ```
//!
//! - [`messages`] - WebSocket message protocol types
//! - [`transport`] - `SessionTransport` over an axum socket
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod handler;
pub mod messages;
pub mod transport;

pub use handler::{chat_handler, chat_router, AgentFactory, ChatState};
pub use messages::{ChatText, ClientMessage, ConnectedMessage, PongMessage, ServerMessage};
pub use transport::WebSocketTransport;
