//! Ticket field keys and the emergency answer rule.

use std::fmt;

/// A question slot of the maintenance questionnaire.
///
/// Keys are the stable strings agents exchange with the core. Unknown keys
/// are kept as `Other` so an agent can ask extra questions the ticket does
/// not map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TicketField {
    IssueDetail,
    Duration,
    Severity,
    Urgency,
    IssueArea,
    AdditionalDetails,
    Emergency,
    Other(String),
}

impl TicketField {
    /// Maps a wire key to a field.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "issue_detail" => Self::IssueDetail,
            "duration" => Self::Duration,
            "severity" => Self::Severity,
            "urgency" => Self::Urgency,
            "issue_area" => Self::IssueArea,
            "additional_details" => Self::AdditionalDetails,
            "emergency" => Self::Emergency,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire key.
    pub fn key(&self) -> &str {
        match self {
            Self::IssueDetail => "issue_detail",
            Self::Duration => "duration",
            Self::Severity => "severity",
            Self::Urgency => "urgency",
            Self::IssueArea => "issue_area",
            Self::AdditionalDetails => "additional_details",
            Self::Emergency => "emergency",
            Self::Other(key) => key,
        }
    }
}

impl fmt::Display for TicketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returns true for a "yes" or "y" answer, ignoring case and surrounding
/// whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// Returns true if this answer must short-circuit into emergency escalation.
pub fn reports_emergency(field: &TicketField, answer: &str) -> bool {
    *field == TicketField::Emergency && is_affirmative(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for field in [
            TicketField::IssueDetail,
            TicketField::Duration,
            TicketField::Severity,
            TicketField::Urgency,
            TicketField::IssueArea,
            TicketField::AdditionalDetails,
            TicketField::Emergency,
        ] {
            assert_eq!(TicketField::from_key(field.key()), field);
        }
    }

    #[test]
    fn unknown_key_is_preserved() {
        let field = TicketField::from_key("pet_on_premises");
        assert_eq!(field, TicketField::Other("pet_on_premises".to_string()));
        assert_eq!(field.key(), "pet_on_premises");
    }

    mod emergency_answers {
        use super::*;

        #[test]
        fn affirmative_answers_escalate() {
            for answer in ["yes", "Yes", " y ", "Y", "YES\n"] {
                assert!(
                    reports_emergency(&TicketField::Emergency, answer),
                    "{:?} should escalate",
                    answer
                );
            }
        }

        #[test]
        fn other_answers_do_not_escalate() {
            for answer in ["no", "maybe", "", "   ", "yes please", "yep"] {
                assert!(
                    !reports_emergency(&TicketField::Emergency, answer),
                    "{:?} should not escalate",
                    answer
                );
            }
        }

        #[test]
        fn yes_to_another_field_does_not_escalate() {
            assert!(!reports_emergency(&TicketField::IssueDetail, "yes"));
            assert!(!reports_emergency(
                &TicketField::Other("emergency_contact".to_string()),
                "yes"
            ));
        }
    }
}
