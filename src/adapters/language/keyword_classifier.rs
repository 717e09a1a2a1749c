//! Keyword-based intent classifier.
//!
//! A deterministic stand-in for a model-backed classifier. Rules are
//! checked in order; the first rule with a matching keyword wins.

use async_trait::async_trait;

use crate::ports::{CollaboratorError, IntentClassifier};

/// Label returned when no rule matches.
pub const UNKNOWN_LABEL: &str = "unknown";

/// One label and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            keywords: keywords.into_iter().map(|k| normalize(&k.into())).collect(),
        }
    }

    fn matches(&self, normalized_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized_text.contains(keyword.as_str()))
    }
}

/// `IntentClassifier` matching whole words and phrases.
#[derive(Debug, Clone)]
pub struct KeywordIntentClassifier {
    rules: Vec<KeywordRule>,
}

impl KeywordIntentClassifier {
    /// Creates a classifier with no rules; everything is `unknown`.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule(mut self, rule: KeywordRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the label for `text` without going through the port.
    pub fn label_for(&self, text: &str) -> &str {
        let normalized = normalize(text);
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.label.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }
}

impl Default for KeywordIntentClassifier {
    /// Maintenance vocabulary first so "hi, my sink is leaking" is a
    /// maintenance request rather than a greeting.
    fn default() -> Self {
        Self::empty()
            .with_rule(KeywordRule::new(
                "maintenance request",
                [
                    "maintenance", "repair", "broken", "leak", "leaking", "clogged",
                    "not working", "fix", "heater", "heat", "mold", "outlet", "toilet",
                ],
            ))
            .with_rule(KeywordRule::new(
                "farewell",
                ["bye", "goodbye", "see you", "that's all", "no thanks", "nothing else"],
            ))
            .with_rule(KeywordRule::new(
                "greet",
                ["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
            ))
    }
}

#[async_trait]
impl IntentClassifier for KeywordIntentClassifier {
    async fn classify(&self, text: &str) -> Result<String, CollaboratorError> {
        Ok(self.label_for(text).to_string())
    }
}

/// Lowercases, turns punctuation into spaces and pads with spaces so that
/// `contains(" word ")` is a whole-word match.
fn normalize(text: &str) -> String {
    let words: Vec<String> = text
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();
    format!(" {} ", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_pads_and_strips_punctuation() {
        assert_eq!(normalize("Hi, there!"), " hi there ");
    }

    #[test]
    fn keywords_are_stored_padded_once() {
        let rule = KeywordRule::new("greet", ["Hello"]);
        assert_eq!(rule.keywords, vec![" hello ".to_string()]);
        assert!(rule.matches(&normalize("hello")));
    }

    mod default_rules {
        use super::*;

        #[test]
        fn recognizes_greeting() {
            let classifier = KeywordIntentClassifier::default();
            assert_eq!(classifier.label_for("Hello!"), "greet");
        }

        #[test]
        fn recognizes_farewell_phrase() {
            let classifier = KeywordIntentClassifier::default();
            assert_eq!(classifier.label_for("No thanks, that's all"), "farewell");
        }

        #[test]
        fn recognizes_multi_word_keyword() {
            let classifier = KeywordIntentClassifier::default();
            assert_eq!(
                classifier.label_for("My heater is not working"),
                "maintenance request"
            );
            assert_eq!(classifier.label_for("Nothing else, thanks"), "farewell");
        }

        #[test]
        fn maintenance_wins_over_greeting() {
            let classifier = KeywordIntentClassifier::default();
            assert_eq!(
                classifier.label_for("Hi, my kitchen sink is leaking"),
                "maintenance request"
            );
        }

        #[test]
        fn matches_whole_words_only() {
            let classifier = KeywordIntentClassifier::default();
            assert_eq!(classifier.label_for("this is a question"), UNKNOWN_LABEL);
        }

        #[test]
        fn unmatched_text_is_unknown() {
            let classifier = KeywordIntentClassifier::default();
            assert_eq!(classifier.label_for("What time is it?"), UNKNOWN_LABEL);
        }
    }

    #[tokio::test]
    async fn custom_rule_is_reported_through_port() {
        let classifier = KeywordIntentClassifier::empty()
            .with_rule(KeywordRule::new("rent payment", ["rent", "pay"]));

        let label = classifier.classify("How do I pay RENT?").await.unwrap();

        assert_eq!(label, "rent payment");
    }
}
