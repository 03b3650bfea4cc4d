use serde::{Deserialize, Serialize};
use std::fmt;

pub const MEDIA_FILE_STEM: &str = "media";
pub const METADATA_FILE_NAME: &str = "report.json";
/// Append-only index at the upload root, next to the report folders.
pub const INDEX_FILE_NAME: &str = "index.jsonl";

/// Declared kind of the captured evidence.
///
/// The server does not restrict the declared value: anything outside the
/// three known kinds is kept verbatim in `Other` and stored without an
/// extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Video,
    Picture,
    Audio,
    Other(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Video => "video",
            MediaType::Picture => "picture",
            MediaType::Audio => "audio",
            MediaType::Other(raw) => raw,
        }
    }

    /// Extension is chosen from the declared type only, never from the bytes.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Audio | MediaType::Video => ".webm",
            MediaType::Picture => ".png",
            MediaType::Other(_) => "",
        }
    }

    pub fn media_filename(&self) -> String {
        format!("{}{}", MEDIA_FILE_STEM, self.extension())
    }
}

impl From<&str> for MediaType {
    fn from(raw: &str) -> Self {
        match raw {
            "video" => MediaType::Video,
            "picture" => MediaType::Picture,
            "audio" => MediaType::Audio,
            other => MediaType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitter {
    Anonymous,
    Named(String),
}

impl Submitter {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Submitter::Anonymous)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Submitter::Anonymous => None,
            Submitter::Named(name) => Some(name),
        }
    }
}

/// Content of `report.json`. Key order is part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub details: String,
    pub bully_type: String,
    pub date_time: String,
    pub location: String,
    pub anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub media_type: String,
    pub media_filename: String,
}
