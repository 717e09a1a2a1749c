//! State machine contract shared by the dialog loops.
//!
//! Both the session loop and the maintenance subflow are modelled as
//! enums whose legal edges are declared here and checked in tests.

use super::ValidationError;

/// Trait for enums that represent a finite state machine.
///
/// Implementors declare the legal edges; `transition_to` and
/// `is_terminal` come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SubflowState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (AwaitingQuestion, AwaitingAnswer) | ...)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             AwaitingQuestion => vec![AwaitingAnswer, Finalizing, Done],
///             ...
///         }
///     }
/// }
///
/// let next = SubflowState::AwaitingQuestion.transition_to(SubflowState::Finalizing)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is legal.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all legal target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs a checked transition.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// A state with no outgoing edges ends the machine.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        On,
        Broken,
    }

    impl StateMachine for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Light::*;
            matches!((self, target), (Off, On) | (On, Off) | (On, Broken))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Light::*;
            match self {
                Off => vec![On],
                On => vec![Off, Broken],
                Broken => vec![],
            }
        }
    }

    #[test]
    fn transition_to_accepts_declared_edge() {
        assert_eq!(Light::Off.transition_to(Light::On), Ok(Light::On));
    }

    #[test]
    fn transition_to_rejects_undeclared_edge() {
        assert!(Light::Off.transition_to(Light::Broken).is_err());
    }

    #[test]
    fn state_without_edges_is_terminal() {
        assert!(Light::Broken.is_terminal());
        assert!(!Light::On.is_terminal());
    }
}
