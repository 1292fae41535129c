// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum size of a single uploaded document, in bytes (5 MiB).
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Maximum number of documents attached to one grievance.
pub const MAX_FILES: usize = 5;

/// Minimum length of the grievance description, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 100;

/// The category a grievance is filed under.
///
/// Serialized with the human-readable labels the submission wire format
/// and the persisted draft both use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GrievanceCategory {
    /// A problem with a delivered service.
    #[default]
    #[serde(rename = "Service Issue")]
    ServiceIssue,
    /// A billing or payment dispute.
    #[serde(rename = "Billing")]
    Billing,
    /// A technical malfunction or outage.
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    /// A refund request.
    #[serde(rename = "Refund")]
    Refund,
    /// Anything that does not fit the other categories.
    #[serde(rename = "Other")]
    Other,
}

impl GrievanceCategory {
    /// Converts this category to its wire label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceIssue => "Service Issue",
            Self::Billing => "Billing",
            Self::TechnicalSupport => "Technical Support",
            Self::Refund => "Refund",
            Self::Other => "Other",
        }
    }
}

impl FromStr for GrievanceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Service Issue" => Ok(Self::ServiceIssue),
            "Billing" => Ok(Self::Billing),
            "Technical Support" => Ok(Self::TechnicalSupport),
            "Refund" => Ok(Self::Refund),
            "Other" => Ok(Self::Other),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for GrievanceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The accepted formats for an uploaded document.
///
/// Serialized as the declaring MIME type. The declared type is trusted as-is;
/// no content sniffing is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// A PDF document.
    #[serde(rename = "application/pdf")]
    Pdf,
    /// A JPEG image.
    #[serde(rename = "image/jpeg")]
    Jpeg,
    /// A PNG image.
    #[serde(rename = "image/png")]
    Png,
}

impl FileKind {
    /// Converts this kind to its MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl FromStr for FileKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application/pdf" => Ok(Self::Pdf),
            // Browsers disagree on the JPEG MIME type; accept both spellings.
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            _ => Err(DomainError::UnsupportedFileType(s.to_string())),
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One uploaded attachment: metadata plus the inline base64 content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFile {
    /// The original file name.
    pub name: String,
    /// The byte length of the decoded content.
    pub size: u64,
    /// The declared format of the content.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// The file bytes, base64-encoded for embedding in the form aggregate.
    #[serde(rename = "base64")]
    pub content: String,
}

/// The single mutable aggregate the wizard edits.
///
/// `Default` produces the empty initial form a fresh session starts from.
/// Field names follow the persisted draft's JSON wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    /// The complainant's full name.
    pub full_name: String,
    /// The complainant's email address.
    pub email: String,
    /// Optional 10-digit phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The complainant's postal address.
    pub address: String,
    /// The category the grievance is filed under.
    pub category: GrievanceCategory,
    /// A one-line summary of the grievance.
    pub subject: String,
    /// The long free-text body describing the grievance.
    pub description: String,
    /// The date of the incident as an ISO calendar date string (YYYY-MM-DD).
    pub incident_date: String,
    /// Supporting documents, at most [`MAX_FILES`] entries.
    pub files: Vec<DocumentFile>,
    /// Whether the complainant confirmed the information is correct.
    pub agreed_to_terms: bool,
}

impl FormData {
    /// Checks whether this form is structurally equal to the empty initial form.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

/// Identifies one field of [`FormData`].
///
/// A fixed-key identifier rather than an open string, so that error maps
/// stay exhaustiveness-checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The `fullName` field.
    FullName,
    /// The `email` field.
    Email,
    /// The `phone` field.
    Phone,
    /// The `address` field.
    Address,
    /// The `category` field.
    Category,
    /// The `subject` field.
    Subject,
    /// The `description` field.
    Description,
    /// The `incidentDate` field.
    IncidentDate,
    /// The `files` field.
    Files,
    /// The `agreedToTerms` field.
    AgreedToTerms,
}

impl Field {
    /// All form fields, in form order.
    pub const ALL: [Self; 10] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Category,
        Self::Subject,
        Self::Description,
        Self::IncidentDate,
        Self::Files,
        Self::AgreedToTerms,
    ];

    /// Converts this field to its wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Category => "category",
            Self::Subject => "subject",
            Self::Description => "description",
            Self::IncidentDate => "incidentDate",
            Self::Files => "files",
            Self::AgreedToTerms => "agreedToTerms",
        }
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "category" => Ok(Self::Category),
            "subject" => Ok(Self::Subject),
            "description" => Ok(Self::Description),
            "incidentDate" => Ok(Self::IncidentDate),
            "files" => Ok(Self::Files),
            "agreedToTerms" => Ok(Self::AgreedToTerms),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
