// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the end-to-end submission flow.

use crate::{FixedClock, Notice, Session, SessionError};
use grievance_domain::{Field, FormUpdate};
use grievance_form::{CoreError, Step, WizardState};
use grievance_persistence::{DraftLoad, MemorySlot};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::helpers::{
    Script, ScriptedGateway, TestSession, seeded_slot, session_at_review, today, valid_form,
    walk_to_review,
};

fn session_with_script(script: Script) -> (TestSession, Rc<Cell<usize>>) {
    let (gateway, calls) = ScriptedGateway::new(script);
    let session: TestSession =
        Session::new(MemorySlot::new(), gateway, FixedClock(today()), None);
    (session, calls)
}

#[tokio::test]
async fn test_acceptance_resets_the_form_and_raises_a_success_notice() {
    let mut session: TestSession = session_at_review();
    session.save_draft();

    session.submit().await.unwrap();

    assert_eq!(*session.state(), WizardState::new());
    assert_eq!(session.location(), "step=0");
    assert_eq!(session.store().load(), DraftLoad::Absent);
    assert_eq!(
        session.take_notice(),
        Some(Notice::Success(String::from(
            "Grievance submitted successfully! Reference ID: REF001"
        )))
    );
    // The notice is one-shot.
    assert!(session.take_notice().is_none());
}

#[tokio::test]
async fn test_validation_failure_blocks_the_gateway_call() {
    let (mut session, calls) = session_with_script(Script::Accept);
    walk_to_review(&mut session);
    session
        .edit(FormUpdate {
            email: Some(String::from("stale")),
            ..FormUpdate::default()
        })
        .unwrap();

    session.submit().await.unwrap();

    assert_eq!(calls.get(), 0);
    assert!(!session.state().submitting);
    assert_eq!(session.state().step, Step::Review);
    assert_eq!(
        session.state().errors.get(Field::Email),
        Some("Invalid email address")
    );
    assert!(session.take_notice().is_none());
}

#[tokio::test]
async fn test_gateway_rejection_folds_first_message_per_field() {
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
    errors.insert(
        String::from("email"),
        vec![
            String::from("Invalid email address"),
            String::from("Domain not allowed"),
        ],
    );
    errors.insert(String::from("bogusField"), vec![String::from("ignored")]);

    let (mut session, calls) = session_with_script(Script::Reject(errors));
    walk_to_review(&mut session);

    session.submit().await.unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(session.state().step, Step::Review);
    assert!(!session.state().submitting);
    assert_eq!(
        session.state().errors.get(Field::Email),
        Some("Invalid email address")
    );
    // The unknown field name was dropped, not surfaced.
    assert_eq!(session.state().errors.len(), 1);
    assert_eq!(session.state().data, valid_form());
    assert_eq!(
        session.take_notice(),
        Some(Notice::Error(String::from(
            "Validation failed. Please check your inputs."
        )))
    );
}

#[tokio::test]
async fn test_transport_failure_keeps_the_form_and_raises_a_retry_notice() {
    let (mut session, calls) = session_with_script(Script::Fail);
    walk_to_review(&mut session);

    session.submit().await.unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(session.state().step, Step::Review);
    assert!(!session.state().submitting);
    assert!(session.state().errors.is_empty());
    assert_eq!(session.state().data, valid_form());
    assert_eq!(
        session.take_notice(),
        Some(Notice::Error(String::from(
            "Submission failed. Please try again."
        )))
    );
}

#[tokio::test]
async fn test_submit_outside_review_is_rejected() {
    let (mut session, calls) = session_with_script(Script::Accept);

    let result = session.submit().await;

    assert!(matches!(
        result,
        Err(SessionError::Rejected(CoreError::SubmitOutsideReview {
            from: Step::Personal
        }))
    ));
    assert_eq!(calls.get(), 0);
}

#[tokio::test]
async fn test_submit_behind_the_draft_gate_is_rejected() {
    let mut session: TestSession = Session::new(
        seeded_slot(3, &valid_form()),
        ScriptedGateway::accepting(),
        FixedClock(today()),
        None,
    );

    let result = session.submit().await;

    assert!(matches!(result, Err(SessionError::DraftDecisionPending)));
}

#[test]
fn test_notice_exposes_its_message_for_either_variant() {
    assert_eq!(Notice::Success(String::from("ok")).message(), "ok");
    assert_eq!(Notice::Error(String::from("try again")).message(), "try again");
}

#[tokio::test]
async fn test_rejected_submission_can_be_fixed_and_resubmitted() {
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
    errors.insert(
        String::from("email"),
        vec![String::from("Invalid email address")],
    );

    let (mut session, _) = session_with_script(Script::Reject(errors));
    walk_to_review(&mut session);
    session.submit().await.unwrap();
    let _ = session.take_notice();

    // The form is editable again after the rejection.
    session
        .edit(FormUpdate {
            email: Some(String::from("asha.rao@example.org")),
            ..FormUpdate::default()
        })
        .unwrap();
    assert!(session.state().errors.get(Field::Email).is_none());
}
