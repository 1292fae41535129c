// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A one-shot notification for the renderer to surface and dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The submission was accepted; carries the gateway's message and
    /// reference id.
    Success(String),
    /// The submission failed; carries a blocking, retryable message.
    Error(String),
}

impl Notice {
    /// The message to display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}
