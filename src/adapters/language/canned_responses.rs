//! Canned response generator.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::ports::{CollaboratorError, ResponseGenerator};

/// `ResponseGenerator` backed by a fixed label-to-text table.
///
/// Labels missing from the table get the fallback text.
#[derive(Debug, Clone)]
pub struct CannedResponseGenerator {
    responses: HashMap<String, String>,
    fallback: String,
}

impl CannedResponseGenerator {
    /// Creates a generator with no entries.
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            responses: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Adds or replaces the reply for a label.
    pub fn with_response(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses
            .insert(label.into().trim().to_lowercase(), text.into());
        self
    }

    /// Looks up the reply for a label.
    pub fn response_for(&self, label: &str) -> &str {
        self.responses
            .get(&label.trim().to_lowercase())
            .unwrap_or(&self.fallback)
    }
}

impl Default for CannedResponseGenerator {
    fn default() -> Self {
        Self::with_fallback("I'm sorry, I didn't quite catch that. Could you rephrase?")
            .with_response("greet", "Hi there! What can I do for you?")
            .with_response("farewell", "Goodbye! Have a great day.")
            .with_response(
                "unknown",
                "I'm sorry, I didn't quite catch that. Could you rephrase?",
            )
    }
}

#[async_trait]
impl ResponseGenerator for CannedResponseGenerator {
    async fn generate(&self, label: &str) -> Result<String, CollaboratorError> {
        Ok(self.response_for(label).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_label_uses_table_entry() {
        let generator = CannedResponseGenerator::default();
        assert_eq!(generator.response_for("farewell"), "Goodbye! Have a great day.");
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let generator = CannedResponseGenerator::with_fallback("?").with_response("Greet", "Hey");
        assert_eq!(generator.response_for(" greet "), "Hey");
    }

    #[tokio::test]
    async fn unlisted_label_gets_fallback() {
        let generator = CannedResponseGenerator::with_fallback("Not sure about that.");
        let text = generator.generate("rent payment").await.unwrap();
        assert_eq!(text, "Not sure about that.");
    }
}
