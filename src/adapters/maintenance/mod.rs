//! Maintenance questionnaire adapters.

mod questionnaire_agent;

pub use questionnaire_agent::QuestionnaireAgent;
