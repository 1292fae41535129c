// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the per-step and combined validation rule sets.

use crate::{
    Field, FormData, FormErrors, validate_all, validate_documents, validate_grievance,
    validate_personal, validate_review,
};

use super::helpers::{sample_file, today, valid_form};

#[test]
fn test_personal_passes_for_valid_form() {
    let errors: FormErrors = validate_personal(&valid_form());

    assert!(errors.is_empty());
}

#[test]
fn test_personal_flags_exactly_the_violated_fields() {
    let data: FormData = FormData {
        full_name: String::from("  "),
        email: String::from("not-an-email"),
        ..valid_form()
    };

    let errors: FormErrors = validate_personal(&data);

    assert_eq!(errors.len(), 2);
    assert!(errors.get(Field::FullName).is_some());
    assert!(errors.get(Field::Email).is_some());
    assert!(errors.get(Field::Address).is_none());
}

#[test]
fn test_email_grammar_rejects_common_malformations() {
    for email in ["", "plain", "@nolocal.com", "two@@ats.com", "no@dot", "sp ace@x.com", "x@.com"] {
        let data: FormData = FormData {
            email: String::from(email),
            ..valid_form()
        };
        assert!(
            validate_personal(&data).get(Field::Email).is_some(),
            "expected '{email}' to be rejected"
        );
    }
}

#[test]
fn test_phone_is_optional_but_checked_when_present() {
    let absent: FormData = FormData {
        phone: None,
        ..valid_form()
    };
    assert!(validate_personal(&absent).get(Field::Phone).is_none());

    for phone in ["12345", "5876543210", "98765432101", "98765abc10"] {
        let data: FormData = FormData {
            phone: Some(String::from(phone)),
            ..valid_form()
        };
        assert!(
            validate_personal(&data).get(Field::Phone).is_some(),
            "expected '{phone}' to be rejected"
        );
    }
}

#[test]
fn test_empty_string_phone_validates_like_an_absent_phone() {
    let data: FormData = FormData {
        phone: Some(String::new()),
        ..valid_form()
    };

    assert!(validate_personal(&data).get(Field::Phone).is_none());
}

#[test]
fn test_draft_json_with_empty_phone_passes_personal_rules() {
    // Drafts saved before any phone edit store "" rather than omitting the
    // field.
    let json: &str = r#"{
        "fullName": "Asha Rao",
        "email": "asha.rao@example.com",
        "phone": "",
        "address": "14 Lake View Road, Pune",
        "category": "Billing",
        "subject": "Double charge on invoice 4417",
        "description": "",
        "incidentDate": "",
        "files": [],
        "agreedToTerms": false
    }"#;
    let data: FormData = serde_json::from_str(json).unwrap();

    assert_eq!(data.phone, Some(String::new()));
    assert!(validate_personal(&data).is_empty());
}

#[test]
fn test_grievance_passes_for_valid_form() {
    let errors: FormErrors = validate_grievance(&valid_form(), today());

    assert!(errors.is_empty());
}

#[test]
fn test_description_boundary_at_100_characters() {
    let just_short: FormData = FormData {
        description: "x".repeat(99),
        ..valid_form()
    };
    assert!(
        validate_grievance(&just_short, today())
            .get(Field::Description)
            .is_some()
    );

    let just_long_enough: FormData = FormData {
        description: "x".repeat(100),
        ..valid_form()
    };
    assert!(
        validate_grievance(&just_long_enough, today())
            .get(Field::Description)
            .is_none()
    );
}

#[test]
fn test_future_incident_date_fails_and_today_passes() {
    let tomorrow: FormData = FormData {
        incident_date: String::from("2026-06-02"),
        ..valid_form()
    };
    assert_eq!(
        validate_grievance(&tomorrow, today()).get(Field::IncidentDate),
        Some("Date cannot be in the future")
    );

    let same_day: FormData = FormData {
        incident_date: String::from("2026-06-01"),
        ..valid_form()
    };
    assert!(
        validate_grievance(&same_day, today())
            .get(Field::IncidentDate)
            .is_none()
    );
}

#[test]
fn test_unparseable_incident_date_is_rejected() {
    for value in ["", "yesterday", "2026-13-01", "01/06/2026"] {
        let data: FormData = FormData {
            incident_date: String::from(value),
            ..valid_form()
        };
        assert!(
            validate_grievance(&data, today())
                .get(Field::IncidentDate)
                .is_some(),
            "expected '{value}' to be rejected"
        );
    }
}

#[test]
fn test_documents_require_one_to_five_files() {
    let none: FormData = FormData {
        files: Vec::new(),
        ..valid_form()
    };
    assert!(validate_documents(&none).get(Field::Files).is_some());

    let six: FormData = FormData {
        files: (0..6).map(|i| sample_file(&format!("f{i}.pdf"), 100)).collect(),
        ..valid_form()
    };
    assert!(validate_documents(&six).get(Field::Files).is_some());

    let five: FormData = FormData {
        files: (0..5).map(|i| sample_file(&format!("f{i}.pdf"), 100)).collect(),
        ..valid_form()
    };
    assert!(validate_documents(&five).is_empty());
}

#[test]
fn test_documents_reject_oversized_file() {
    let data: FormData = FormData {
        files: vec![sample_file("huge.pdf", 6 * 1024 * 1024)],
        ..valid_form()
    };

    assert_eq!(
        validate_documents(&data).get(Field::Files),
        Some("File size must be less than 5MB")
    );
}

#[test]
fn test_documents_accept_file_at_exact_limit() {
    let data: FormData = FormData {
        files: vec![sample_file("limit.pdf", 5 * 1024 * 1024)],
        ..valid_form()
    };

    assert!(validate_documents(&data).is_empty());
}

#[test]
fn test_review_requires_terms_confirmation() {
    let unchecked: FormData = FormData {
        agreed_to_terms: false,
        ..valid_form()
    };

    assert!(
        validate_review(&unchecked)
            .get(Field::AgreedToTerms)
            .is_some()
    );
    assert!(validate_review(&valid_form()).is_empty());
}

#[test]
fn test_combined_rules_union_all_steps() {
    let data: FormData = FormData {
        email: String::from("bad"),
        description: String::from("too short"),
        files: Vec::new(),
        agreed_to_terms: false,
        ..valid_form()
    };

    let errors: FormErrors = validate_all(&data, today());

    assert!(errors.get(Field::Email).is_some());
    assert!(errors.get(Field::Description).is_some());
    assert!(errors.get(Field::Files).is_some());
    assert!(errors.get(Field::AgreedToTerms).is_some());
    assert!(errors.get(Field::FullName).is_none());
}

#[test]
fn test_combined_rules_pass_for_valid_form() {
    assert!(validate_all(&valid_form(), today()).is_empty());
}
