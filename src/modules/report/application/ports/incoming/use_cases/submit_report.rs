use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::report::application::{
    domain::{
        entities::{MediaType, Submitter},
        media_signature::matches_declared_type,
        policies::storage_policy::ReportStoragePolicy,
    },
    ports::outgoing::ReportStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Command Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitReportCommandError {
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Media too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    MediaTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Media content does not match declared type {media_type}")]
    MediaSignatureMismatch { media_type: String },
}

//
// ──────────────────────────────────────────────────────────
// Submit Report Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitReportCommand {
    media: Bytes,
    media_type: MediaType,
    details: String,
    bully_type: String,
    date_time: String,
    location: String,
    submitter: Submitter,
}

impl SubmitReportCommand {
    pub fn builder() -> SubmitReportCommandBuilder {
        SubmitReportCommandBuilder::default()
    }

    pub fn media(&self) -> &Bytes {
        &self.media
    }
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }
    pub fn details(&self) -> &str {
        &self.details
    }
    pub fn bully_type(&self) -> &str {
        &self.bully_type
    }
    pub fn date_time(&self) -> &str {
        &self.date_time
    }
    pub fn location(&self) -> &str {
        &self.location
    }
    pub fn submitter(&self) -> &Submitter {
        &self.submitter
    }
}

/// Collects raw form values. A text value counts as present only when it is
/// non-empty; the media part counts as present whenever it was sent.
#[derive(Default)]
pub struct SubmitReportCommandBuilder {
    media: Option<Bytes>,
    media_type: Option<String>,
    details: Option<String>,
    bully_type: Option<String>,
    date_time: Option<String>,
    location: Option<String>,
    anonymous: Option<String>,
    name: Option<String>,
}

impl SubmitReportCommandBuilder {
    pub fn media(mut self, media: Option<Bytes>) -> Self {
        self.media = media;
        self
    }

    pub fn media_type(mut self, media_type: Option<String>) -> Self {
        self.media_type = media_type;
        self
    }

    pub fn details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }

    pub fn bully_type(mut self, bully_type: Option<String>) -> Self {
        self.bully_type = bully_type;
        self
    }

    pub fn date_time(mut self, date_time: Option<String>) -> Self {
        self.date_time = date_time;
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Only the literal text `"true"` marks a submission anonymous.
    pub fn anonymous(mut self, anonymous: Option<String>) -> Self {
        self.anonymous = anonymous;
        self
    }

    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn build(
        self,
        policy: &ReportStoragePolicy,
    ) -> Result<SubmitReportCommand, SubmitReportCommandError> {
        let anonymous = self.anonymous.as_deref() == Some("true");

        let media_type = present(self.media_type);
        let details = present(self.details);
        let bully_type = present(self.bully_type);
        let date_time = present(self.date_time);
        let location = present(self.location);
        let submitter = if anonymous {
            Some(Submitter::Anonymous)
        } else {
            self.name
                .filter(|n| !n.trim().is_empty())
                .map(Submitter::Named)
        };

        let mut missing = Vec::new();
        if self.media.is_none() {
            missing.push("media");
        }
        if media_type.is_none() {
            missing.push("type");
        }
        if details.is_none() {
            missing.push("details");
        }
        if bully_type.is_none() {
            missing.push("bullyType");
        }
        if date_time.is_none() {
            missing.push("dateTime");
        }
        if location.is_none() {
            missing.push("location");
        }
        if submitter.is_none() {
            missing.push("name");
        }

        let (
            Some(media),
            Some(media_type),
            Some(details),
            Some(bully_type),
            Some(date_time),
            Some(location),
            Some(submitter),
        ) = (
            self.media, media_type, details, bully_type, date_time, location, submitter,
        )
        else {
            return Err(SubmitReportCommandError::MissingFields(missing));
        };

        let media_type = MediaType::from(media_type.as_str());

        let actual_bytes = media.len() as u64;
        if actual_bytes > policy.max_media_bytes {
            return Err(SubmitReportCommandError::MediaTooLarge {
                max_bytes: policy.max_media_bytes,
                actual_bytes,
            });
        }

        if policy.verify_media_signature && !matches_declared_type(&media_type, &media) {
            return Err(SubmitReportCommandError::MediaSignatureMismatch {
                media_type: media_type.to_string(),
            });
        }

        Ok(SubmitReportCommand {
            media,
            media_type,
            details,
            bully_type,
            date_time,
            location,
            submitter,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error / Result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitReportError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Report folder collision: {0}")]
    FolderCollision(String),
}

impl From<ReportStoreError> for SubmitReportError {
    fn from(error: ReportStoreError) -> Self {
        match error {
            ReportStoreError::FolderExists(folder) => SubmitReportError::FolderCollision(folder),
            other => SubmitReportError::StorageError(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReportResult {
    pub report_id: Uuid,
    pub folder_name: String,
    pub media_filename: String,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitReportUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitReportCommand,
    ) -> Result<SubmitReportResult, SubmitReportError>;
}
