// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur when the gateway cannot be reached at all.
///
/// Gateway-reported rejections are not errors; they arrive as a
/// [`crate::SubmitResult`] with `success = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The submission call failed at the transport level.
    Transport(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Submission transport failure: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}
