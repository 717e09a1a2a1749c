//! Maintenance subflow state machine.
//!
//! One question per turn until the agent has nothing left to ask, then the
//! draft is finalized. Every path ends in `Done`; anything unexpected ends
//! the subflow rather than looping.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, TicketId};

/// Where the questionnaire currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubflowState {
    /// Asking the agent for the next unanswered field.
    #[default]
    AwaitingQuestion,
    /// Question sent, waiting for the tenant.
    AwaitingAnswer,
    /// Tenant reported an emergency; escalation message pending.
    EmergencyEscalation,
    /// All fields answered; building and storing the ticket.
    Finalizing,
    Done,
}

/// Something that happened inside the subflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubflowEvent {
    QuestionAsked,
    NoMoreQuestions,
    AnswerRecorded,
    EmergencyReported,
    InputClosed,
    Escalated,
    Submitted,
    Failed,
}

impl SubflowState {
    /// Applies an event. Failures and out-of-place events end the subflow.
    pub fn on(self, event: SubflowEvent) -> Self {
        use SubflowEvent::*;
        use SubflowState::*;
        match (self, event) {
            (AwaitingQuestion, QuestionAsked) => AwaitingAnswer,
            (AwaitingQuestion, NoMoreQuestions) => Finalizing,
            (AwaitingAnswer, AnswerRecorded) => AwaitingQuestion,
            (AwaitingAnswer, EmergencyReported) => EmergencyEscalation,
            (_, _) => Done,
        }
    }
}

impl StateMachine for SubflowState {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubflowState::*;
        match self {
            AwaitingQuestion => vec![AwaitingAnswer, Finalizing, Done],
            AwaitingAnswer => vec![AwaitingQuestion, EmergencyEscalation, Done],
            EmergencyEscalation => vec![Done],
            Finalizing => vec![Done],
            Done => vec![],
        }
    }
}

/// How a subflow run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubflowOutcome {
    /// Ticket stored and confirmed to the tenant.
    Submitted(TicketId),
    /// Tenant reported an emergency; no ticket.
    Escalated,
    /// Transport reported end-of-session mid-questionnaire.
    InputClosed,
    /// A collaborator failed; the tenant got an apology.
    Failed,
}

impl SubflowOutcome {
    /// Returns true if the outer session has no input left.
    pub fn closes_session(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_STATES: [SubflowState; 5] = [
        SubflowState::AwaitingQuestion,
        SubflowState::AwaitingAnswer,
        SubflowState::EmergencyEscalation,
        SubflowState::Finalizing,
        SubflowState::Done,
    ];

    const ALL_EVENTS: [SubflowEvent; 8] = [
        SubflowEvent::QuestionAsked,
        SubflowEvent::NoMoreQuestions,
        SubflowEvent::AnswerRecorded,
        SubflowEvent::EmergencyReported,
        SubflowEvent::InputClosed,
        SubflowEvent::Escalated,
        SubflowEvent::Submitted,
        SubflowEvent::Failed,
    ];

    #[test]
    fn question_answer_cycle() {
        let state = SubflowState::default()
            .on(SubflowEvent::QuestionAsked)
            .on(SubflowEvent::AnswerRecorded);
        assert_eq!(state, SubflowState::AwaitingQuestion);
    }

    #[test]
    fn completion_goes_through_finalizing() {
        let state = SubflowState::AwaitingQuestion.on(SubflowEvent::NoMoreQuestions);
        assert_eq!(state, SubflowState::Finalizing);
        assert_eq!(state.on(SubflowEvent::Submitted), SubflowState::Done);
    }

    #[test]
    fn emergency_goes_through_escalation() {
        let state = SubflowState::AwaitingAnswer.on(SubflowEvent::EmergencyReported);
        assert_eq!(state, SubflowState::EmergencyEscalation);
        assert_eq!(state.on(SubflowEvent::Escalated), SubflowState::Done);
    }

    #[test]
    fn closed_input_ends_subflow() {
        assert_eq!(
            SubflowState::AwaitingAnswer.on(SubflowEvent::InputClosed),
            SubflowState::Done
        );
    }

    #[test]
    fn failure_ends_subflow_from_every_state() {
        for state in ALL_STATES {
            assert_eq!(state.on(SubflowEvent::Failed), SubflowState::Done);
        }
    }

    #[test]
    fn only_input_closed_outcome_closes_session() {
        assert!(SubflowOutcome::InputClosed.closes_session());
        assert!(!SubflowOutcome::Escalated.closes_session());
        assert!(!SubflowOutcome::Failed.closes_session());
        assert!(!SubflowOutcome::Submitted(TicketId::new()).closes_session());
    }

    proptest! {
        #[test]
        fn transitions_follow_declared_edges(
            state in proptest::sample::select(ALL_STATES.to_vec()),
            event in proptest::sample::select(ALL_EVENTS.to_vec()),
        ) {
            let next = state.on(event);
            if state == SubflowState::Done {
                prop_assert_eq!(next, SubflowState::Done);
            } else {
                prop_assert!(state.can_transition_to(&next));
            }
        }
    }
}
