// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during draft persistence operations.
///
/// These never reach the user: the session logs them and treats the draft
/// as absent (on read) or skipped (on write).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading or writing the slot failed.
    Io(String),
    /// Serializing the draft to JSON failed.
    Serialization(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "Draft slot I/O error: {msg}"),
            Self::Serialization(msg) => write!(f, "Draft serialization error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
