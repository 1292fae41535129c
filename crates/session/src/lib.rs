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

mod clock;
mod error;
mod location;
mod notice;
mod session;
mod upload;

#[cfg(test)]
mod tests;

// Re-export public types
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::SessionError;
pub use location::{location_query, step_from_query};
pub use notice::Notice;
pub use session::Session;
pub use upload::{IncomingFile, UploadRejection};
