// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use grievance_domain::{
    DomainError, FormData, FormErrors, validate_documents, validate_grievance, validate_personal,
    validate_review,
};
use time::Date;

/// One of the four ordered stages of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Personal details: name, email, phone, address.
    Personal,
    /// Grievance details: category, subject, description, incident date.
    Grievance,
    /// Supporting documents.
    Documents,
    /// Review and confirmation.
    Review,
}

impl Step {
    /// The numeric position of this step, 0-3.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Personal => 0,
            Self::Grievance => 1,
            Self::Documents => 2,
            Self::Review => 3,
        }
    }

    /// Resolves a numeric position back to a step.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStepIndex`] for any index outside 0-3.
    pub const fn from_index(index: u8) -> Result<Self, DomainError> {
        match index {
            0 => Ok(Self::Personal),
            1 => Ok(Self::Grievance),
            2 => Ok(Self::Documents),
            3 => Ok(Self::Review),
            _ => Err(DomainError::InvalidStepIndex(index)),
        }
    }

    /// The step after this one, or `None` at Review.
    #[must_use]
    pub const fn forward(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Grievance),
            Self::Grievance => Some(Self::Documents),
            Self::Documents => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The step before this one, or `None` at Personal.
    #[must_use]
    pub const fn backward(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Grievance => Some(Self::Personal),
            Self::Documents => Some(Self::Grievance),
            Self::Review => Some(Self::Documents),
        }
    }

    /// Runs this step's validation rule set against the form.
    ///
    /// Returns an empty [`FormErrors`] if the step is valid. Never mutates
    /// the form.
    #[must_use]
    pub fn validate(self, data: &FormData, today: Date) -> FormErrors {
        match self {
            Self::Personal => validate_personal(data),
            Self::Grievance => validate_grievance(data, today),
            Self::Documents => validate_documents(data),
            Self::Review => validate_review(data),
        }
    }

    /// Converts this step to its stage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Grievance => "grievance",
            Self::Documents => "documents",
            Self::Review => "review",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete in-memory state of one wizard session.
///
/// Owned exclusively by the session controller for the lifetime of one
/// form-filling session; collaborators receive copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// The step currently displayed.
    pub step: Step,
    /// The form aggregate being edited.
    pub data: FormData,
    /// Field-scoped validation messages for the rendered step.
    pub errors: FormErrors,
    /// Whether a submission is in flight. While set, every editing and
    /// navigation command is rejected.
    pub submitting: bool,
}

impl WizardState {
    /// Creates the initial state: step 0 with the empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Step::Personal,
            data: FormData::default(),
            errors: FormErrors::new(),
            submitting: false,
        }
    }

    /// Creates a state resumed from a restored draft.
    #[must_use]
    pub fn resumed(step: Step, data: FormData) -> Self {
        Self {
            step,
            data,
            errors: FormErrors::new(),
            submitting: false,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: WizardState,
    /// Whether the displayed step changed, so the caller can refresh the
    /// published location indicator.
    pub step_changed: bool,
}
