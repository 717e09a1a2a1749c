//! Local language adapters.
//!
//! Deterministic implementations of the classifier, generator and
//! humanizer ports, used when no model server is wired in.

mod canned_responses;
mod keyword_classifier;
mod passthrough_humanizer;

pub use canned_responses::CannedResponseGenerator;
pub use keyword_classifier::{KeywordIntentClassifier, KeywordRule, UNKNOWN_LABEL};
pub use passthrough_humanizer::PassthroughHumanizer;
