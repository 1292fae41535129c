// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{Step, WizardState};
use grievance_domain::{DocumentFile, FileKind, FormData, GrievanceCategory};
use time::{Date, Month};

/// The fixed "current date" used by every state machine test.
pub fn today() -> Date {
    Date::from_calendar_date(2026, Month::June, 1).unwrap()
}

pub fn sample_file(name: &str, size: u64) -> DocumentFile {
    DocumentFile {
        name: String::from(name),
        size,
        kind: FileKind::Pdf,
        content: String::from("JVBERi0xLjQ="),
    }
}

/// A form that passes every step's rules against [`today`].
pub fn valid_form() -> FormData {
    FormData {
        full_name: String::from("Asha Rao"),
        email: String::from("asha.rao@example.com"),
        phone: Some(String::from("9876543210")),
        address: String::from("14 Lake View Road, Pune"),
        category: GrievanceCategory::Billing,
        subject: String::from("Double charge on invoice 4417"),
        description: "I was charged twice for the same invoice in May. ".repeat(3),
        incident_date: String::from("2026-01-15"),
        files: vec![sample_file("invoice.pdf", 120_000)],
        agreed_to_terms: true,
    }
}

/// A state sitting at the given step with a fully valid form.
pub fn state_at(step: Step) -> WizardState {
    WizardState {
        step,
        data: valid_form(),
        ..WizardState::new()
    }
}
