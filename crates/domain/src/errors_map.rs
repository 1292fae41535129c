// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Field;

/// Field-scoped validation messages: at most one message per form field.
///
/// This is a fixed-key optional-value mapping rather than an open dictionary,
/// so a renderer can exhaustively ask about every field it draws.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    full_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    category: Option<String>,
    subject: Option<String>,
    description: Option<String>,
    incident_date: Option<String>,
    files: Option<String>,
    agreed_to_terms: Option<String>,
}

impl FormErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message for a field, if one is set.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Sets the message for a field, replacing any existing one.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    /// Removes the message for a field, if any.
    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    /// Checks whether no field carries a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Returns the number of fields carrying a message.
    #[must_use]
    pub fn len(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }

    /// Returns every `(field, message)` pair, in form order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .iter()
            .filter_map(|field| self.get(*field).map(|message| (*field, message)))
            .collect()
    }

    /// Copies every message set in `other` into `self`, overwriting on overlap.
    pub fn absorb(&mut self, other: Self) {
        for field in Field::ALL {
            if let Some(message) = other.slot(field) {
                self.set(field, message.clone());
            }
        }
    }

    const fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::Category => &self.category,
            Field::Subject => &self.subject,
            Field::Description => &self.description,
            Field::IncidentDate => &self.incident_date,
            Field::Files => &self.files,
            Field::AgreedToTerms => &self.agreed_to_terms,
        }
    }

    const fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::Category => &mut self.category,
            Field::Subject => &mut self.subject,
            Field::Description => &mut self.description,
            Field::IncidentDate => &mut self.incident_date,
            Field::Files => &mut self.files,
            Field::AgreedToTerms => &mut self.agreed_to_terms,
        }
    }
}
