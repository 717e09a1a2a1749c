//! Language Ports - classifier, response generator and humanizer.
//!
//! Stateless text services shared by every session, typically backed by a
//! model server. The core only sees labels and strings.

use async_trait::async_trait;

use super::CollaboratorError;

/// Maps a raw user line to an intent label.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Returns the label for `text`, e.g. `greet` or `maintenance request`.
    async fn classify(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Maps an intent label to the canonical reply text.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(&self, label: &str) -> Result<String, CollaboratorError>;
}

/// Stylistic rewrite applied to every outbound message.
#[async_trait]
pub trait Humanizer: Send + Sync {
    async fn transform(&self, text: &str) -> Result<String, CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(
        _: &dyn IntentClassifier,
        _: &dyn ResponseGenerator,
        _: &dyn Humanizer,
    ) {
    }

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}

    #[test]
    fn trait_objects_are_send_sync() {
        assert_send_sync::<dyn IntentClassifier>();
        assert_send_sync::<dyn ResponseGenerator>();
        assert_send_sync::<dyn Humanizer>();
    }
}
