// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod result;
mod stub;

#[cfg(test)]
mod tests;

use grievance_domain::FormData;

// Re-export public types
pub use error::GatewayError;
pub use result::SubmitResult;
pub use stub::StubGateway;

/// The external acceptor of a completed, validated submission.
///
/// The sole network-shaped boundary of the wizard. The call is asynchronous
/// and may be slow; callers must stay responsive while awaiting it.
pub trait SubmissionGateway {
    /// Submits a completed form payload.
    ///
    /// The gateway re-validates the full payload server-side: a validation
    /// failure is a successful call returning `success = false` with field
    /// errors. The `Err` arm is reserved for transport-level failure.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the gateway could not be reached at all.
    fn submit(
        &self,
        data: &FormData,
    ) -> impl Future<Output = Result<SubmitResult, GatewayError>>;
}
