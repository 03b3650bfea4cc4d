use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::report::application::domain::entities::ReportMetadata;

/// What to do when the target folder already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderWriteMode {
    /// Reuse the folder and replace its files.
    Overwrite,
    /// Fail with `FolderExists`.
    CreateNew,
}

// Input DTO for persisting one report
#[derive(Debug, Clone)]
pub struct NewReport {
    pub report_id: Uuid,
    pub folder_name: String,
    pub label: String,
    pub received_at: DateTime<Utc>,
    pub write_mode: FolderWriteMode,
    pub media: Bytes,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReport {
    pub report_id: Uuid,
    pub folder_name: String,
    pub media_filename: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReportStoreError {
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Report folder already exists: {0}")]
    FolderExists(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn persist(&self, report: NewReport) -> Result<PersistedReport, ReportStoreError>;
}
