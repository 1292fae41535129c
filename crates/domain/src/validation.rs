// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::errors_map::FormErrors;
use crate::types::{Field, FormData, MAX_FILE_BYTES, MIN_DESCRIPTION_CHARS};
use time::Date;
use time::macros::format_description;

/// Validates the personal-details step.
///
/// Checks that the full name and address are present, the email matches a
/// standard email grammar, and the phone, if given and non-empty, is a
/// 10-digit number beginning with 6-9.
///
/// # Returns
///
/// An empty [`FormErrors`] if the step is valid, otherwise one message per
/// violated field. Never mutates the form.
#[must_use]
pub fn validate_personal(data: &FormData) -> FormErrors {
    let mut errors: FormErrors = FormErrors::new();

    if data.full_name.trim().is_empty() {
        errors.set(Field::FullName, "Full name is required");
    }

    if !is_valid_email(&data.email) {
        errors.set(Field::Email, "Invalid email address");
    }

    // Drafts written before any phone edit store "" rather than omitting
    // the field; both mean "not provided".
    if data
        .phone
        .as_deref()
        .filter(|phone| !phone.is_empty())
        .is_some_and(|phone| !is_valid_phone(phone))
    {
        errors.set(Field::Phone, "Phone must be 10 digits starting with 6-9");
    }

    if data.address.trim().is_empty() {
        errors.set(Field::Address, "Address is required");
    }

    errors
}

/// Validates the grievance-details step.
///
/// The subject must be present, the description must be at least
/// [`MIN_DESCRIPTION_CHARS`] characters, and the incident date must parse to
/// a calendar date no later than `today`.
///
/// # Arguments
///
/// * `data` - The form to validate
/// * `today` - The current calendar date, injected so the rule stays pure
#[must_use]
pub fn validate_grievance(data: &FormData, today: Date) -> FormErrors {
    let mut errors: FormErrors = FormErrors::new();

    if data.subject.trim().is_empty() {
        errors.set(Field::Subject, "Subject is required");
    }

    if data.description.chars().count() < MIN_DESCRIPTION_CHARS {
        errors.set(
            Field::Description,
            format!("Description must be at least {MIN_DESCRIPTION_CHARS} characters"),
        );
    }

    match parse_incident_date(&data.incident_date) {
        Some(date) if date > today => {
            errors.set(Field::IncidentDate, "Date cannot be in the future");
        }
        Some(_) => {}
        None => {
            errors.set(Field::IncidentDate, "A valid incident date is required");
        }
    }

    errors
}

/// Validates the documents step: 1 to 5 files, each within the size limit.
///
/// File format violations cannot occur here because the kind is typed; the
/// declared MIME type is screened at upload time.
#[must_use]
pub fn validate_documents(data: &FormData) -> FormErrors {
    let mut errors: FormErrors = FormErrors::new();

    if data.files.is_empty() {
        errors.set(Field::Files, "At least one document is required");
    } else if data.files.len() > crate::types::MAX_FILES {
        errors.set(Field::Files, "Maximum 5 files allowed");
    } else if data.files.iter().any(|file| file.size > MAX_FILE_BYTES) {
        errors.set(Field::Files, "File size must be less than 5MB");
    }

    errors
}

/// Validates the review step: the terms confirmation must be checked.
#[must_use]
pub fn validate_review(data: &FormData) -> FormErrors {
    let mut errors: FormErrors = FormErrors::new();

    if !data.agreed_to_terms {
        errors.set(
            Field::AgreedToTerms,
            "You must confirm the information is correct",
        );
    }

    errors
}

/// Runs the combined rule set: the union of all four step rules.
///
/// This is run once more at submission time, independent of which step the
/// user is viewing, as a defense against stale or bypassed client state.
#[must_use]
pub fn validate_all(data: &FormData, today: Date) -> FormErrors {
    let mut errors: FormErrors = validate_personal(data);
    errors.absorb(validate_grievance(data, today));
    errors.absorb(validate_documents(data));
    errors.absorb(validate_review(data));
    errors
}

/// Checks an address against a minimal standard email grammar:
/// exactly one `@`, a non-empty local part, and a dotted domain with
/// non-empty labels. No whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Checks a phone number: exactly 10 ASCII digits, the first in 6-9.
fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10
        && phone.chars().all(|c| c.is_ascii_digit())
        && phone.starts_with(['6', '7', '8', '9'])
}

/// Parses an ISO `YYYY-MM-DD` calendar date, returning `None` on any failure.
fn parse_incident_date(value: &str) -> Option<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).ok()
}
