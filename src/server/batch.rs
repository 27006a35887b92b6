//! Single-file English detection over a batch of uploads.
//!
//! Every upload runs the pipeline on the blocking pool under its own timeout.
//! Siblings always run to completion; a single failure fails the batch.

use std::time::Duration;

use thiserror::Error;
use tokio::{task::JoinSet, time::timeout};
use tracing::warn;

use super::error::ServerError;
use crate::core::{Dialect, ParseDiagnostic, ScanMode, english_report_line, scan_source};

/// Reply when no upload contains English text.
pub const NO_ENGLISH_TEXT: &str = "No English text detected.";

#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }
}

#[derive(Debug, Error)]
enum UploadError {
    #[error("file is not valid UTF-8")]
    InvalidUtf8,
    #[error("{0}")]
    Parse(ParseDiagnostic),
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
    #[error("detection task failed: {0}")]
    Task(String),
}

/// Report lines for one upload, each terminated by a newline.
fn detect_upload(upload: &Upload, dialect: Dialect) -> Result<String, UploadError> {
    let source = std::str::from_utf8(&upload.contents).map_err(|_| UploadError::InvalidUtf8)?;
    let entries = scan_source(&upload.file_name, source, ScanMode::English, dialect)
        .map_err(UploadError::Parse)?;

    Ok(entries
        .iter()
        .map(|entry| format!("{}\n", english_report_line(entry)))
        .collect())
}

/// Run English detection over every upload and join the reports in upload
/// order.
pub async fn detect_uploads(
    uploads: Vec<Upload>,
    dialect: Dialect,
    limit: Duration,
) -> Result<String, ServerError> {
    let count = uploads.len();
    let mut tasks = JoinSet::new();

    for (index, upload) in uploads.into_iter().enumerate() {
        tasks.spawn(async move {
            let file_name = upload.file_name.clone();
            let work = tokio::task::spawn_blocking(move || detect_upload(&upload, dialect));
            let result = match timeout(limit, work).await {
                Ok(Ok(result)) => result,
                Ok(Err(join_error)) => Err(UploadError::Task(join_error.to_string())),
                Err(_) => Err(UploadError::TimedOut(limit)),
            };
            (index, file_name, result)
        });
    }

    let mut reports: Vec<Option<String>> = vec![None; count];
    let mut failed = 0;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, _, Ok(report))) => reports[index] = Some(report),
            Ok((_, file_name, Err(error))) => {
                warn!(file = %file_name, "{}", error);
                failed += 1;
            }
            Err(join_error) => {
                warn!(error = %join_error, "upload task aborted");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(ServerError::Processing { failed });
    }

    let message: String = reports.into_iter().flatten().collect();
    if message.is_empty() {
        Ok(NO_ENGLISH_TEXT.to_string())
    } else {
        Ok(message)
    }
}
