// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use grievance_domain::FormData;
use serde::{Deserialize, Serialize};

/// The persisted draft snapshot: the wire format of the draft slot.
///
/// Field names match the JSON the original browser drafts used, so a slot
/// written by one session is readable by the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// The step the user was on, 0-3.
    pub current_step: u8,
    /// The form data at save time.
    pub data: FormData,
    /// Whether the snapshot was taken after the session finished loading.
    /// Always true for drafts this store writes; kept for wire compatibility.
    pub is_loaded: bool,
}

impl FormState {
    /// Creates a snapshot of the given step and data.
    #[must_use]
    pub const fn new(current_step: u8, data: FormData) -> Self {
        Self {
            current_step,
            data,
            is_loaded: true,
        }
    }

    /// Checks whether this snapshot is a stale empty draft: step 0 with data
    /// structurally equal to the empty initial form.
    #[must_use]
    pub fn is_stale_empty(&self) -> bool {
        self.current_step == 0 && self.data.is_initial()
    }
}
