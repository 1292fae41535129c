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
mod errors_map;
mod types;
mod update;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use errors_map::FormErrors;
pub use types::{
    DocumentFile, Field, FileKind, FormData, GrievanceCategory, MAX_FILES, MAX_FILE_BYTES,
    MIN_DESCRIPTION_CHARS,
};
pub use update::FormUpdate;
pub use validation::{
    validate_all, validate_documents, validate_grievance, validate_personal, validate_review,
};
