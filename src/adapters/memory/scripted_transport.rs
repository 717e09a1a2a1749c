//! Scripted transport for tests and local demos.
//!
//! Plays back a fixed list of user lines and records everything the
//! facilitator sends. The script running out is end-of-session.
//!
//! # Example
//!
//! ```ignore
//! let transport = ScriptedTransport::new().with_lines(["hi", "bye"]);
//! let probe = transport.clone();
//!
//! Facilitator::new(Session::new(user, transport), ...).run().await;
//!
//! assert_eq!(probe.sent().len(), 3);
//! assert!(probe.is_disconnected());
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{SessionTransport, TransportError};

/// One scripted inbound step.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Inbound {
    Line(String),
    Failure(String),
}

#[derive(Debug, Default)]
struct ScriptState {
    inbound: VecDeque<Inbound>,
    sent: Vec<String>,
    /// Sends succeed until this many messages went out.
    send_budget: Option<usize>,
    disconnect_calls: usize,
}

/// In-memory `SessionTransport` driven by a script.
///
/// Clones share state, so a test can keep a probe after handing the
/// transport to a facilitator.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedTransport {
    /// Creates a transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one user line.
    pub fn with_line(self, line: impl Into<String>) -> Self {
        self.lock().inbound.push_back(Inbound::Line(line.into()));
        self
    }

    /// Queues several user lines in order.
    pub fn with_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut state = self.lock();
            state
                .inbound
                .extend(lines.into_iter().map(|line| Inbound::Line(line.into())));
        }
        self
    }

    /// Queues a receive failure at the current script position.
    pub fn with_receive_failure(self, message: impl Into<String>) -> Self {
        self.lock().inbound.push_back(Inbound::Failure(message.into()));
        self
    }

    /// Lets `count` sends succeed; every later send fails.
    pub fn failing_sends_after(self, count: usize) -> Self {
        self.lock().send_budget = Some(count);
        self
    }

    /// All successfully sent messages, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.lock().sent.clone()
    }

    /// The most recently sent message.
    pub fn last_sent(&self) -> Option<String> {
        self.lock().sent.last().cloned()
    }

    /// Number of script steps not yet consumed.
    pub fn remaining_inbound(&self) -> usize {
        self.lock().inbound.len()
    }

    pub fn is_disconnected(&self) -> bool {
        self.lock().disconnect_calls > 0
    }

    pub fn disconnect_calls(&self) -> usize {
        self.lock().disconnect_calls
    }

    fn lock(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionTransport for ScriptedTransport {
    async fn send(&mut self, text: &str) -> Result<(), TransportError> {
        let mut state = self.lock();
        if state.disconnect_calls > 0 {
            return Err(TransportError::Closed);
        }
        if state.send_budget.is_some_and(|budget| state.sent.len() >= budget) {
            return Err(TransportError::SendFailed("scripted send failure".to_string()));
        }
        state.sent.push(text.to_string());
        Ok(())
    }

    async fn receive(&mut self) -> Result<Option<String>, TransportError> {
        let mut state = self.lock();
        if state.disconnect_calls > 0 {
            return Err(TransportError::Closed);
        }
        match state.inbound.pop_front() {
            Some(Inbound::Line(line)) => Ok(Some(line)),
            Some(Inbound::Failure(message)) => Err(TransportError::ReceiveFailed(message)),
            None => Ok(None),
        }
    }

    async fn disconnect(&mut self) -> Result<(), TransportError> {
        self.lock().disconnect_calls += 1;
        Ok(())
    }
}
