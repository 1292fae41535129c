// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The gateway's reply to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResult {
    /// Whether the grievance was accepted.
    pub success: bool,
    /// A human-readable summary of the outcome.
    pub message: String,
    /// The opaque tracking token handed to the user on acceptance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Field-scoped rejection messages, keyed by wire field name, on
    /// validation failure. Absent on acceptance and on internal failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl SubmitResult {
    /// An acceptance reply carrying a fresh reference id.
    #[must_use]
    pub const fn accepted(message: String, reference_id: String) -> Self {
        Self {
            success: true,
            message,
            reference_id: Some(reference_id),
            errors: None,
        }
    }

    /// A validation rejection carrying field errors.
    #[must_use]
    pub const fn rejected(message: String, errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            success: false,
            message,
            reference_id: None,
            errors: Some(errors),
        }
    }

    /// An internal-failure reply: generic message, no field errors.
    #[must_use]
    pub const fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            reference_id: None,
            errors: None,
        }
    }
}
