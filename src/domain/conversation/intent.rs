//! Intent labels produced by the classifier.

use std::fmt;

/// What the user wants in a single turn.
///
/// The classifier speaks in free-form labels; the known ones get their own
/// variant so dispatch is an exhaustive `match`, everything else is carried
/// through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intent {
    Greet,
    Farewell,
    MaintenanceRequest,
    Unknown,
    /// A label this core has no dedicated handling for.
    Other(String),
}

impl Intent {
    /// Parses a classifier label. Matching ignores surrounding whitespace and
    /// ASCII case; `maintenance_request` is accepted as a spelling of
    /// `maintenance request`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "greet" => Self::Greet,
            "farewell" => Self::Farewell,
            "maintenance request" | "maintenance_request" => Self::MaintenanceRequest,
            "unknown" | "" => Self::Unknown,
            _ => Self::Other(label.trim().to_string()),
        }
    }

    /// The label handed to the response generator.
    pub fn label(&self) -> &str {
        match self {
            Self::Greet => "greet",
            Self::Farewell => "farewell",
            Self::MaintenanceRequest => "maintenance request",
            Self::Unknown => "unknown",
            Self::Other(label) => label,
        }
    }

    /// Returns true if answering this intent ends the session.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Farewell)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
