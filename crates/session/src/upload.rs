// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use grievance_domain::{DocumentFile, FileKind, MAX_FILE_BYTES};
use std::str::FromStr;
use tracing::warn;

/// A raw file handed to the session by the renderer, before screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    /// The original file name.
    pub name: String,
    /// The MIME type the picker declared for the file.
    pub declared_type: String,
    /// The raw file bytes.
    pub bytes: Vec<u8>,
}

/// One file the session refused to attach, with a user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRejection {
    /// The name of the rejected file.
    pub name: String,
    /// The user-facing reason for the rejection.
    pub reason: String,
}

/// Screens one incoming file against the size and format rules.
///
/// Returns the resolved [`FileKind`] on acceptance.
pub(crate) fn screen(file: &IncomingFile) -> Result<FileKind, UploadRejection> {
    if file.bytes.len() as u64 > MAX_FILE_BYTES {
        return Err(UploadRejection {
            name: file.name.clone(),
            reason: format!("File {} exceeds 5MB limit.", file.name),
        });
    }

    FileKind::from_str(&file.declared_type).map_err(|_| UploadRejection {
        name: file.name.clone(),
        reason: format!("File {} has unsupported format.", file.name),
    })
}

/// Base64-encodes a batch of screened files concurrently.
///
/// Encoding a 5 MiB payload is CPU work, so each file is encoded on the
/// blocking pool. Results come back in input order.
pub(crate) async fn encode_all(
    accepted: Vec<(IncomingFile, FileKind)>,
) -> Vec<Result<DocumentFile, UploadRejection>> {
    let names: Vec<String> = accepted.iter().map(|(file, _)| file.name.clone()).collect();
    let handles: Vec<tokio::task::JoinHandle<DocumentFile>> = accepted
        .into_iter()
        .map(|(file, kind)| {
            tokio::task::spawn_blocking(move || {
                let size: u64 = file.bytes.len() as u64;
                let content: String = STANDARD.encode(&file.bytes);
                DocumentFile {
                    name: file.name,
                    size,
                    kind,
                    content,
                }
            })
        })
        .collect();

    let joined = futures::future::join_all(handles).await;
    names
        .into_iter()
        .zip(joined)
        .map(|(name, outcome)| match outcome {
            Ok(document) => Ok(document),
            Err(err) => {
                warn!(%err, file = %name, "file encoding task failed");
                Err(UploadRejection {
                    reason: format!("File {name} could not be processed."),
                    name,
                })
            }
        })
        .collect()
}
