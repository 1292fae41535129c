// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{FixedClock, IncomingFile, Session};
use grievance_domain::{DocumentFile, FileKind, FormData, FormUpdate, GrievanceCategory};
use grievance_gateway::{GatewayError, SubmissionGateway, SubmitResult};
use grievance_persistence::{FormState, MemorySlot};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use time::{Date, Month};

/// The fixed "current date" used by every session test.
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

/// An edit that writes every field of [`valid_form`] in one update.
pub fn full_update() -> FormUpdate {
    let form: FormData = valid_form();
    FormUpdate {
        full_name: Some(form.full_name),
        email: Some(form.email),
        phone: form.phone,
        address: Some(form.address),
        category: Some(form.category),
        subject: Some(form.subject),
        description: Some(form.description),
        incident_date: Some(form.incident_date),
        files: Some(form.files),
        agreed_to_terms: Some(form.agreed_to_terms),
    }
}

/// A raw picked file of `len` zero bytes with the given declared MIME type.
pub fn incoming(name: &str, declared_type: &str, len: usize) -> IncomingFile {
    IncomingFile {
        name: String::from(name),
        declared_type: String::from(declared_type),
        bytes: vec![0_u8; len],
    }
}

/// A memory slot pre-seeded with a serialized draft.
pub fn seeded_slot(step: u8, data: &FormData) -> MemorySlot {
    let state: FormState = FormState::new(step, data.clone());
    MemorySlot::seeded(serde_json::to_string(&state).unwrap())
}

/// What the scripted gateway should answer with.
#[derive(Debug, Clone)]
pub enum Script {
    Accept,
    Reject(BTreeMap<String, Vec<String>>),
    Fail,
}

/// A gateway that plays one scripted reply and counts its calls.
#[derive(Debug)]
pub struct ScriptedGateway {
    script: Script,
    calls: Rc<Cell<usize>>,
}

impl ScriptedGateway {
    pub fn new(script: Script) -> (Self, Rc<Cell<usize>>) {
        let calls: Rc<Cell<usize>> = Rc::new(Cell::new(0));
        (
            Self {
                script,
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }

    pub fn accepting() -> Self {
        Self::new(Script::Accept).0
    }
}

impl SubmissionGateway for ScriptedGateway {
    async fn submit(&self, _data: &FormData) -> Result<SubmitResult, GatewayError> {
        self.calls.set(self.calls.get() + 1);
        match &self.script {
            Script::Accept => Ok(SubmitResult::accepted(
                String::from("Grievance submitted successfully!"),
                String::from("REF001"),
            )),
            Script::Reject(errors) => Ok(SubmitResult::rejected(
                String::from("Validation failed. Please check your inputs."),
                errors.clone(),
            )),
            Script::Fail => Err(GatewayError::Transport(String::from("connection reset"))),
        }
    }
}

pub type TestSession = Session<MemorySlot, ScriptedGateway, FixedClock>;

/// A session over an empty slot and an accepting gateway, at step 0.
pub fn fresh_session() -> TestSession {
    Session::new(
        MemorySlot::new(),
        ScriptedGateway::accepting(),
        FixedClock(today()),
        None,
    )
}

/// Fills the form with [`valid_form`] and walks forward to the review step.
pub fn walk_to_review(session: &mut TestSession) {
    session.edit(full_update()).unwrap();
    session.next().unwrap();
    session.next().unwrap();
    session.next().unwrap();
}

/// A session with a valid form, walked forward to the review step.
pub fn session_at_review() -> TestSession {
    let mut session: TestSession = fresh_session();
    walk_to_review(&mut session);
    session
}
