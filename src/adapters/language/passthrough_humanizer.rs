//! Identity humanizer.

use async_trait::async_trait;

use crate::ports::{CollaboratorError, Humanizer};

/// `Humanizer` that sends text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughHumanizer;

#[async_trait]
impl Humanizer for PassthroughHumanizer {
    async fn transform(&self, text: &str) -> Result<String, CollaboratorError> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_input_unchanged() {
        let text = PassthroughHumanizer.transform("Call 911 now.").await.unwrap();
        assert_eq!(text, "Call 911 now.");
    }
}
