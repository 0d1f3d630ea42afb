// File: src/verdict.rs
// Purpose: Outcome of a single submission attempt

use crate::alert::Alert;
use crate::error::Violation;

/// Side effect applied to an input once the user dismisses the alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissAction {
    /// Empty the input with this element id
    Clear(&'static str),
    /// Move input focus to this element id
    Focus(&'static str),
}

/// A blocked submission: the one alert to show and what to do after it closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocked {
    pub violation: Violation,
    pub alert: Alert,
    pub on_dismiss: Vec<DismissAction>,
}

/// Terminal state of a submission attempt.
///
/// Every attempt goes from idle through validation to exactly one of these.
/// Nothing is retried; a blocked user corrects the input and submits again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Blocked(Blocked),
}

impl Verdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }

    pub fn blocked(&self) -> Option<&Blocked> {
        match self {
            Verdict::Passed => None,
            Verdict::Blocked(blocked) => Some(blocked),
        }
    }

    pub fn violation(&self) -> Option<&Violation> {
        self.blocked().map(|blocked| &blocked.violation)
    }
}
