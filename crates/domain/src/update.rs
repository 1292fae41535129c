// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DocumentFile, Field, FormData, GrievanceCategory};

/// A partial edit of [`FormData`]: only the populated fields are merged.
///
/// This is the payload a renderer hands back on every user edit. The set of
/// populated fields is also the set whose validation messages are cleared
/// optimistically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormUpdate {
    /// New full name, if edited.
    pub full_name: Option<String>,
    /// New email address, if edited.
    pub email: Option<String>,
    /// New phone number, if edited. An empty string clears the phone.
    pub phone: Option<String>,
    /// New postal address, if edited.
    pub address: Option<String>,
    /// New category, if edited.
    pub category: Option<GrievanceCategory>,
    /// New subject line, if edited.
    pub subject: Option<String>,
    /// New description body, if edited.
    pub description: Option<String>,
    /// New incident date, if edited.
    pub incident_date: Option<String>,
    /// Replacement file list, if edited.
    pub files: Option<Vec<DocumentFile>>,
    /// New terms confirmation, if edited.
    pub agreed_to_terms: Option<bool>,
}

impl FormUpdate {
    /// Returns the fields this update touches, in form order.
    #[must_use]
    pub fn touched(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = Vec::new();
        if self.full_name.is_some() {
            fields.push(Field::FullName);
        }
        if self.email.is_some() {
            fields.push(Field::Email);
        }
        if self.phone.is_some() {
            fields.push(Field::Phone);
        }
        if self.address.is_some() {
            fields.push(Field::Address);
        }
        if self.category.is_some() {
            fields.push(Field::Category);
        }
        if self.subject.is_some() {
            fields.push(Field::Subject);
        }
        if self.description.is_some() {
            fields.push(Field::Description);
        }
        if self.incident_date.is_some() {
            fields.push(Field::IncidentDate);
        }
        if self.files.is_some() {
            fields.push(Field::Files);
        }
        if self.agreed_to_terms.is_some() {
            fields.push(Field::AgreedToTerms);
        }
        fields
    }

    /// Checks whether this update touches no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touched().is_empty()
    }
}

impl FormData {
    /// Merges a partial update into this form.
    ///
    /// Untouched fields are left as they are. An empty phone string stores
    /// `None`, matching the renderer's "cleared input" convention.
    pub fn apply_update(&mut self, update: &FormUpdate) {
        if let Some(full_name) = &update.full_name {
            self.full_name = full_name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = if phone.is_empty() {
                None
            } else {
                Some(phone.clone())
            };
        }
        if let Some(address) = &update.address {
            self.address = address.clone();
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(subject) = &update.subject {
            self.subject = subject.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(incident_date) = &update.incident_date {
            self.incident_date = incident_date.clone();
        }
        if let Some(files) = &update.files {
            self.files = files.clone();
        }
        if let Some(agreed_to_terms) = update.agreed_to_terms {
            self.agreed_to_terms = agreed_to_terms;
        }
    }
}
