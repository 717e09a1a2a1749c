//! Finalized maintenance ticket and its assembly from a draft.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{TicketId, Timestamp, UnitId, UserId};

use super::{Priority, TicketDraft, TicketField};

/// Who a ticket is filed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketOwner {
    unit_id: UnitId,
    user_id: UserId,
}

impl TicketOwner {
    /// Owner for a tenant who rents exactly one unit, identified by the
    /// tenant's own id. This is the only unit model supported; a multi-unit
    /// lookup needs a new constructor.
    pub fn single_unit_tenant(user_id: UserId) -> Self {
        Self {
            unit_id: UnitId::of_tenant(&user_id),
            user_id,
        }
    }

    pub fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Values filled in by the core rather than the tenant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TicketPolicy {
    /// Issue area used when the tenant did not name one.
    pub default_issue_area: String,
    /// Photo reference stored on every ticket; uploads are not modelled.
    pub photo_placeholder_url: String,
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            default_issue_area: "Maintenance".to_string(),
            photo_placeholder_url: "http://example.com/photo.jpg".to_string(),
        }
    }
}

/// Reasons a draft cannot become a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("Ticket field '{field}' was never answered")]
    MissingScore { field: TicketField },

    #[error("Ticket field '{field}' is not a whole number: {value:?}")]
    InvalidScore { field: TicketField, value: String },
}

/// A maintenance ticket ready for the ticket store. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    unit_id: UnitId,
    user_id: UserId,
    description: Option<String>,
    duration: Option<String>,
    severity: i32,
    urgency: i32,
    priority: Priority,
    issue_area: String,
    photo_url: String,
    special_instructions: Option<String>,
    created_at: Timestamp,
}

impl Ticket {
    /// Builds a ticket from a finalized draft.
    ///
    /// # Errors
    ///
    /// Returns `TicketError` if severity or urgency is missing or not an
    /// integer.
    pub fn assemble(
        draft: &TicketDraft,
        owner: &TicketOwner,
        policy: &TicketPolicy,
    ) -> Result<Self, TicketError> {
        let severity = parse_score(draft, TicketField::Severity)?;
        let urgency = parse_score(draft, TicketField::Urgency)?;

        let issue_area = draft
            .get(&TicketField::IssueArea)
            .map(str::trim)
            .filter(|area| !area.is_empty())
            .unwrap_or(&policy.default_issue_area)
            .to_string();

        Ok(Self {
            id: TicketId::new(),
            unit_id: owner.unit_id().clone(),
            user_id: owner.user_id().clone(),
            description: owned(draft, &TicketField::IssueDetail),
            duration: owned(draft, &TicketField::Duration),
            severity,
            urgency,
            priority: Priority::from_scores(severity, urgency),
            issue_area,
            photo_url: policy.photo_placeholder_url.clone(),
            special_instructions: owned(draft, &TicketField::AdditionalDetails),
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn severity(&self) -> i32 {
        self.severity
    }

    pub fn urgency(&self) -> i32 {
        self.urgency
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn issue_area(&self) -> &str {
        &self.issue_area
    }

    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.special_instructions.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

fn owned(draft: &TicketDraft, field: &TicketField) -> Option<String> {
    draft.get(field).map(str::to_string)
}

fn parse_score(draft: &TicketDraft, field: TicketField) -> Result<i32, TicketError> {
    let raw = draft
        .get(&field)
        .ok_or_else(|| TicketError::MissingScore { field: field.clone() })?;
    raw.trim().parse::<i32>().map_err(|_| TicketError::InvalidScore {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> TicketOwner {
        TicketOwner::single_unit_tenant(UserId::new("tenant-1").unwrap())
    }

    fn complete_draft() -> TicketDraft {
        TicketDraft::new()
            .with_answer(TicketField::IssueDetail, "Kitchen sink is leaking")
            .with_answer(TicketField::Emergency, "no")
            .with_answer(TicketField::Duration, "Since Monday")
            .with_answer(TicketField::Severity, "6")
            .with_answer(TicketField::Urgency, " 3 ")
            .with_answer(TicketField::IssueArea, "Kitchen")
            .with_answer(TicketField::AdditionalDetails, "Dog is friendly")
    }

    mod owner {
        use super::*;

        #[test]
        fn single_unit_tenant_uses_user_id_for_unit() {
            let owner = owner();
            assert_eq!(owner.unit_id().as_str(), owner.user_id().as_str());
        }
    }

    mod assemble {
        use super::*;

        #[test]
        fn maps_draft_fields_onto_ticket() {
            let ticket = Ticket::assemble(&complete_draft(), &owner(), &TicketPolicy::default())
                .unwrap();

            assert_eq!(ticket.user_id().as_str(), "tenant-1");
            assert_eq!(ticket.unit_id().as_str(), "tenant-1");
            assert_eq!(ticket.description(), Some("Kitchen sink is leaking"));
            assert_eq!(ticket.duration(), Some("Since Monday"));
            assert_eq!(ticket.severity(), 6);
            assert_eq!(ticket.urgency(), 3);
            assert_eq!(ticket.priority(), Priority::Medium);
            assert_eq!(ticket.issue_area(), "Kitchen");
            assert_eq!(ticket.photo_url(), "http://example.com/photo.jpg");
            assert_eq!(ticket.special_instructions(), Some("Dog is friendly"));
        }

        #[test]
        fn missing_issue_area_uses_policy_default() {
            let mut draft = TicketDraft::new()
                .with_answer(TicketField::Severity, "1")
                .with_answer(TicketField::Urgency, "1");
            let ticket = Ticket::assemble(&draft, &owner(), &TicketPolicy::default()).unwrap();
            assert_eq!(ticket.issue_area(), "Maintenance");

            draft.record(TicketField::IssueArea, "   ");
            let ticket = Ticket::assemble(&draft, &owner(), &TicketPolicy::default()).unwrap();
            assert_eq!(ticket.issue_area(), "Maintenance");
        }

        #[test]
        fn optional_text_fields_stay_empty_when_unanswered() {
            let draft = TicketDraft::new()
                .with_answer(TicketField::Severity, "9")
                .with_answer(TicketField::Urgency, "0");
            let ticket = Ticket::assemble(&draft, &owner(), &TicketPolicy::default()).unwrap();
            assert_eq!(ticket.description(), None);
            assert_eq!(ticket.duration(), None);
            assert_eq!(ticket.special_instructions(), None);
            assert_eq!(ticket.priority(), Priority::High);
        }

        #[test]
        fn custom_policy_is_applied() {
            let policy = TicketPolicy {
                default_issue_area: "General".to_string(),
                photo_placeholder_url: "https://cdn.example.org/none.png".to_string(),
            };
            let draft = TicketDraft::new()
                .with_answer(TicketField::Severity, "0")
                .with_answer(TicketField::Urgency, "0");
            let ticket = Ticket::assemble(&draft, &owner(), &policy).unwrap();
            assert_eq!(ticket.issue_area(), "General");
            assert_eq!(ticket.photo_url(), "https://cdn.example.org/none.png");
        }

        #[test]
        fn each_assembly_gets_a_fresh_id() {
            let a = Ticket::assemble(&complete_draft(), &owner(), &TicketPolicy::default()).unwrap();
            let b = Ticket::assemble(&complete_draft(), &owner(), &TicketPolicy::default()).unwrap();
            assert_ne!(a.id(), b.id());
        }
    }

    mod score_validation {
        use super::*;

        #[test]
        fn missing_severity_is_an_error() {
            let draft = TicketDraft::new().with_answer(TicketField::Urgency, "4");
            let result = Ticket::assemble(&draft, &owner(), &TicketPolicy::default());
            assert_eq!(
                result,
                Err(TicketError::MissingScore {
                    field: TicketField::Severity
                })
            );
        }

        #[test]
        fn non_numeric_urgency_is_an_error() {
            let draft = TicketDraft::new()
                .with_answer(TicketField::Severity, "4")
                .with_answer(TicketField::Urgency, "pretty urgent");
            let result = Ticket::assemble(&draft, &owner(), &TicketPolicy::default());
            assert_eq!(
                result,
                Err(TicketError::InvalidScore {
                    field: TicketField::Urgency,
                    value: "pretty urgent".to_string(),
                })
            );
        }

        #[test]
        fn fractional_score_is_an_error() {
            let draft = TicketDraft::new()
                .with_answer(TicketField::Severity, "7.5")
                .with_answer(TicketField::Urgency, "1");
            assert!(matches!(
                Ticket::assemble(&draft, &owner(), &TicketPolicy::default()),
                Err(TicketError::InvalidScore { .. })
            ));
        }

        #[test]
        fn error_message_names_the_field() {
            let err = TicketError::InvalidScore {
                field: TicketField::Severity,
                value: "x".to_string(),
            };
            assert_eq!(
                err.to_string(),
                "Ticket field 'severity' is not a whole number: \"x\""
            );
        }
    }
}
