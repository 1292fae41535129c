// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::GatewayError;
use crate::result::SubmitResult;
use crate::SubmissionGateway;
use grievance_domain::{FormData, FormErrors, validate_all};
use rand::RngExt;
use std::collections::BTreeMap;
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tokio::time::sleep;
use tracing::info;

/// Length of a generated reference id.
const REFERENCE_ID_LEN: usize = 6;

const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A gateway stub that validates, logs, and invents a reference id.
///
/// Simulates network-like latency with a configurable sleep. Reference ids
/// are random, not collision-resistant; a real acceptor must replace this
/// id scheme.
#[derive(Debug, Clone)]
pub struct StubGateway {
    latency: Duration,
}

impl StubGateway {
    /// The latency the stub simulates by default.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

    /// Creates a stub with the given simulated latency.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StubGateway {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

impl SubmissionGateway for StubGateway {
    async fn submit(&self, data: &FormData) -> Result<SubmitResult, GatewayError> {
        sleep(self.latency).await;

        let today: Date = OffsetDateTime::now_utc().date();
        let violations: FormErrors = validate_all(data, today);
        if !violations.is_empty() {
            let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for (field, message) in violations.entries() {
                errors.insert(field.as_str().to_string(), vec![message.to_string()]);
            }
            info!(
                rejected_fields = errors.len(),
                "submission rejected by server-side validation"
            );
            return Ok(SubmitResult::rejected(
                String::from("Validation failed. Please check your inputs."),
                errors,
            ));
        }

        let documents: Vec<String> = data
            .files
            .iter()
            .map(|file| format!("{} ({} bytes)", file.name, file.size))
            .collect();
        info!(
            full_name = %data.full_name,
            email = %data.email,
            category = %data.category,
            subject = %data.subject,
            incident_date = %data.incident_date,
            documents = ?documents,
            "grievance submission received"
        );

        Ok(SubmitResult::accepted(
            String::from("Grievance submitted successfully!"),
            generate_reference_id(),
        ))
    }
}

/// Generates a short uppercase alphanumeric tracking token.
fn generate_reference_id() -> String {
    let mut rng = rand::rng();
    (0..REFERENCE_ID_LEN)
        .map(|_| {
            let index: usize = rng.random_range(0..REFERENCE_ALPHABET.len());
            char::from(REFERENCE_ALPHABET[index])
        })
        .collect()
}
