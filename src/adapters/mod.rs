//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the conversation core to external systems:
//! - `language` - Keyword classifier, canned replies, passthrough humanizer
//! - `maintenance` - Scripted questionnaire agent
//! - `memory` - Scripted transport and in-memory ticket store
//! - `postgres` - PostgreSQL ticket store
//! - `websocket` - Axum WebSocket chat endpoint

pub mod language;
pub mod maintenance;
pub mod memory;
pub mod postgres;
pub mod websocket;
