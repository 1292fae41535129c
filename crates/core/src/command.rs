// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Step;
use grievance_domain::{FormErrors, FormUpdate};

/// A command represents user or renderer intent as data only.
///
/// Commands are the only way to request wizard state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Merge a partial edit into the form, clearing the touched fields'
    /// validation messages.
    Edit {
        /// The fields being edited.
        update: FormUpdate,
    },
    /// Leave the current step forward, gated by that step's rules.
    Next,
    /// Go back one step, unconditionally.
    Back,
    /// Jump to an arbitrary step from the review step's "edit this section"
    /// links, unconditionally.
    JumpTo {
        /// The step to display.
        target: Step,
    },
    /// Start a submission, gated by the combined rule set.
    BeginSubmit,
    /// Record the gateway's verdict for the submission in flight.
    CompleteSubmit {
        /// The gateway's verdict.
        outcome: SubmitOutcome,
    },
}

/// The gateway's verdict on a submission, reduced to what the state machine
/// needs to transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The gateway accepted the grievance.
    Accepted,
    /// The gateway rejected the grievance with field-scoped messages
    /// (first message per field).
    Rejected {
        /// The rejected fields and their messages.
        errors: FormErrors,
    },
}
