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

mod backend;
mod error;
mod form_state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types
pub use backend::{DraftSlot, FileSlot, MemorySlot};
pub use error::PersistenceError;
pub use form_state::FormState;
pub use store::{DraftLoad, DraftStore};
