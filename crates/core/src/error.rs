// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Step;

/// Errors that can occur when a command is rejected by the state machine.
///
/// A rejected command leaves the state untouched. Validation failures are
/// not errors; they are transitions that populate the state's error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A submission is in flight; editing and navigation are locked out.
    SubmissionInFlight,
    /// `Next` was requested at the review step, which has no next step.
    NoNextStep,
    /// `JumpTo` was requested from a step other than review.
    JumpOutsideReview {
        /// The step the jump was attempted from.
        from: Step,
    },
    /// `BeginSubmit` was requested from a step other than review.
    SubmitOutsideReview {
        /// The step the submission was attempted from.
        from: Step,
    },
    /// `CompleteSubmit` was requested with no submission in flight.
    NoSubmissionInFlight,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubmissionInFlight => {
                write!(f, "A submission is already in flight")
            }
            Self::NoNextStep => write!(f, "The review step has no next step"),
            Self::JumpOutsideReview { from } => {
                write!(f, "Jumping to a section is only allowed from review, not {from}")
            }
            Self::SubmitOutsideReview { from } => {
                write!(f, "Submission is only allowed from review, not {from}")
            }
            Self::NoSubmissionInFlight => {
                write!(f, "No submission is in flight")
            }
        }
    }
}

impl std::error::Error for CoreError {}
