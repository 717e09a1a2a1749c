//! Ticket priority derived from severity and urgency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which either input makes a ticket `High`.
pub const HIGH_PRIORITY_THRESHOLD: i32 = 8;

/// Score at or above which either input makes a ticket `Medium`.
pub const MEDIUM_PRIORITY_THRESHOLD: i32 = 5;

/// How soon maintenance staff should look at a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Derives the priority from the tenant's two scores.
    ///
    /// Scores are conventionally 0-10 but are not range-checked; the larger
    /// of the two decides.
    pub fn from_scores(severity: i32, urgency: i32) -> Self {
        let worst = severity.max(urgency);
        if worst >= HIGH_PRIORITY_THRESHOLD {
            Self::High
        } else if worst >= MEDIUM_PRIORITY_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn documented_examples() {
        assert_eq!(Priority::from_scores(9, 0), Priority::High);
        assert_eq!(Priority::from_scores(5, 4), Priority::Medium);
        assert_eq!(Priority::from_scores(2, 3), Priority::Low);
        assert_eq!(Priority::from_scores(8, 8), Priority::High);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Priority::from_scores(0, 8), Priority::High);
        assert_eq!(Priority::from_scores(7, 7), Priority::Medium);
        assert_eq!(Priority::from_scores(0, 5), Priority::Medium);
        assert_eq!(Priority::from_scores(4, 4), Priority::Low);
    }

    #[test]
    fn out_of_range_scores_are_not_clamped() {
        assert_eq!(Priority::from_scores(42, -3), Priority::High);
        assert_eq!(Priority::from_scores(-10, -1), Priority::Low);
    }

    #[test]
    fn serializes_with_capitalized_names() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"Medium\"");
    }

    proptest! {
        #[test]
        fn high_iff_either_score_reaches_eight(severity in -20i32..30, urgency in -20i32..30) {
            let priority = Priority::from_scores(severity, urgency);
            prop_assert_eq!(priority == Priority::High, severity >= 8 || urgency >= 8);
        }

        #[test]
        fn medium_iff_not_high_and_either_reaches_five(severity in -20i32..30, urgency in -20i32..30) {
            let priority = Priority::from_scores(severity, urgency);
            let high = severity >= 8 || urgency >= 8;
            let medium = !high && (severity >= 5 || urgency >= 5);
            prop_assert_eq!(priority == Priority::Medium, medium);
            prop_assert_eq!(priority == Priority::Low, !high && !medium);
        }

        #[test]
        fn symmetric_in_its_inputs(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(Priority::from_scores(a, b), Priority::from_scores(b, a));
        }
    }
}
