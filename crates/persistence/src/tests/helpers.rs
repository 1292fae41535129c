// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures for the persistence tests.

use grievance_domain::{DocumentFile, FileKind, FormData, GrievanceCategory};

pub fn sample_file(name: &str, size: u64) -> DocumentFile {
    DocumentFile {
        name: String::from(name),
        size,
        kind: FileKind::Png,
        content: String::from("iVBORw0KGgo="),
    }
}

/// A partially filled form, the typical draft payload.
pub fn partial_form() -> FormData {
    FormData {
        full_name: String::from("Asha Rao"),
        email: String::from("asha.rao@example.com"),
        category: GrievanceCategory::Refund,
        subject: String::from("Refund not received"),
        ..FormData::default()
    }
}
