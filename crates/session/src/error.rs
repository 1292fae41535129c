// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use grievance_form::CoreError;
use thiserror::Error;

/// Errors the session surfaces to its caller.
///
/// Persistence and gateway failures never appear here: the session recovers
/// from them internally (logged, draft treated as absent, or a retryable
/// notice raised).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A saved draft was found; `restore_draft` or `discard_and_start_new`
    /// must resolve it before the form accepts anything else.
    #[error("A saved draft is awaiting a restore-or-discard decision")]
    DraftDecisionPending,

    /// `restore_draft` or `discard_and_start_new` was called with no draft
    /// decision pending.
    #[error("No saved draft decision is pending")]
    NoDraftDecisionPending,

    /// The state machine rejected the command.
    #[error(transparent)]
    Rejected(#[from] CoreError),
}
