// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, SubmitOutcome};
use crate::error::CoreError;
use crate::state::{Step, TransitionResult, WizardState};
use grievance_domain::{FormErrors, validate_all};
use time::Date;

/// Applies a command to the current state, producing a new state.
///
/// This function is pure: the current state is never mutated, and the same
/// inputs always produce the same transition.
///
/// # Arguments
///
/// * `state` - The current wizard state (immutable)
/// * `command` - The command to apply
/// * `today` - The current calendar date, used by date-sensitive rules
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state
/// * `Err(CoreError)` if the command is rejected in the current state
///
/// # Errors
///
/// Returns an error if:
/// - Any command other than `CompleteSubmit` arrives while a submission is
///   in flight
/// - `Next` arrives at the review step
/// - `JumpTo` or `BeginSubmit` arrives away from the review step
/// - `CompleteSubmit` arrives with no submission in flight
pub fn apply(
    state: &WizardState,
    command: Command,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    if state.submitting && !matches!(command, Command::CompleteSubmit { .. }) {
        return Err(CoreError::SubmissionInFlight);
    }

    match command {
        Command::Edit { update } => {
            let mut new_state: WizardState = state.clone();
            new_state.data.apply_update(&update);
            // Optimistic clearing: only the touched fields, no revalidation.
            for field in update.touched() {
                new_state.errors.clear(field);
            }
            Ok(TransitionResult {
                new_state,
                step_changed: false,
            })
        }
        Command::Next => {
            let Some(next) = state.step.forward() else {
                return Err(CoreError::NoNextStep);
            };

            let violations: FormErrors = state.step.validate(&state.data, today);
            let mut new_state: WizardState = state.clone();
            if violations.is_empty() {
                new_state.step = next;
                new_state.errors = FormErrors::new();
                Ok(TransitionResult {
                    new_state,
                    step_changed: true,
                })
            } else {
                new_state.errors = violations;
                Ok(TransitionResult {
                    new_state,
                    step_changed: false,
                })
            }
        }
        Command::Back => {
            // Backward navigation is always free; below step 0 it is a no-op.
            state.step.backward().map_or_else(
                || {
                    Ok(TransitionResult {
                        new_state: state.clone(),
                        step_changed: false,
                    })
                },
                |previous| {
                    let mut new_state: WizardState = state.clone();
                    new_state.step = previous;
                    Ok(TransitionResult {
                        new_state,
                        step_changed: true,
                    })
                },
            )
        }
        Command::JumpTo { target } => {
            if state.step != Step::Review {
                return Err(CoreError::JumpOutsideReview { from: state.step });
            }

            let mut new_state: WizardState = state.clone();
            new_state.step = target;
            Ok(TransitionResult {
                step_changed: target != Step::Review,
                new_state,
            })
        }
        Command::BeginSubmit => {
            if state.step != Step::Review {
                return Err(CoreError::SubmitOutsideReview { from: state.step });
            }

            let violations: FormErrors = validate_all(&state.data, today);
            let mut new_state: WizardState = state.clone();
            if violations.is_empty() {
                new_state.submitting = true;
                new_state.errors = FormErrors::new();
            } else {
                new_state.errors = violations;
            }
            Ok(TransitionResult {
                new_state,
                step_changed: false,
            })
        }
        Command::CompleteSubmit { outcome } => {
            if !state.submitting {
                return Err(CoreError::NoSubmissionInFlight);
            }

            match outcome {
                SubmitOutcome::Accepted => {
                    // Success is momentary: reset and re-enter editing at
                    // step 0 so another grievance can be filed.
                    Ok(TransitionResult {
                        new_state: WizardState::new(),
                        step_changed: true,
                    })
                }
                SubmitOutcome::Rejected { errors } => {
                    let mut new_state: WizardState = state.clone();
                    new_state.submitting = false;
                    new_state.errors = errors;
                    Ok(TransitionResult {
                        new_state,
                        step_changed: false,
                    })
                }
            }
        }
    }
}
