// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing domain values from their wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The category label is not one of the five known categories.
    UnknownCategory(String),
    /// The declared file type does not map to a supported format.
    UnsupportedFileType(String),
    /// The field name is not one of the known form fields.
    UnknownField(String),
    /// The step index is outside the wizard's step range.
    InvalidStepIndex(u8),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(label) => write!(f, "Unknown grievance category: '{label}'"),
            Self::UnsupportedFileType(mime) => write!(f, "Unsupported file type: '{mime}'"),
            Self::UnknownField(name) => write!(f, "Unknown form field: '{name}'"),
            Self::InvalidStepIndex(index) => {
                write!(f, "Step index {index} is outside the range 0-3")
            }
        }
    }
}

impl std::error::Error for DomainError {}
