//! Outbound and inbound text through the humanizer and transport.

use crate::ports::{SessionTransport, TransportError};

use super::Facilitator;

impl<T: SessionTransport> Facilitator<T> {
    /// Humanizes `text` and sends it. A humanizer failure sends the
    /// original text.
    pub(super) async fn say(&mut self, text: &str) -> Result<(), TransportError> {
        let outbound = match self.collaborators.humanizer.transform(text).await {
            Ok(humanized) => humanized,
            Err(err) => {
                tracing::warn!(error = %err, "Humanizer failed, sending original text");
                text.to_string()
            }
        };
        self.session.transport.send(&outbound).await
    }

    /// Next user line, or `None` once the tenant has left.
    pub(super) async fn listen(&mut self) -> Result<Option<String>, TransportError> {
        self.session.transport.receive().await
    }
}
