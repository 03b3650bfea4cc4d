use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;

use crate::report::application::domain::entities::{Submitter, INDEX_FILE_NAME};

/// How a report's directory under the upload root is named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FolderNaming {
    /// Random UUID per report; the readable label only goes to the index.
    #[default]
    Unique,
    /// Folder is the label itself. Equal labels overwrite each other.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown folder naming strategy: {0}")]
pub struct UnknownFolderNaming(pub String);

impl FromStr for FolderNaming {
    type Err = UnknownFolderNaming;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unique" | "uuid" => Ok(FolderNaming::Unique),
            "legacy" => Ok(FolderNaming::Legacy),
            other => Err(UnknownFolderNaming(other.to_string())),
        }
    }
}

impl fmt::Display for FolderNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FolderNaming::Unique => "unique",
            FolderNaming::Legacy => "legacy",
        };
        write!(f, "{s}")
    }
}

/// ISO-8601 UTC with milliseconds, `:` and `.` replaced by `-`.
///
/// `2024-01-01T10:00:00.000Z` becomes `2024-01-01T10-00-00-000Z`.
pub fn timestamp_label(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Trim, collapse whitespace runs to `_`, and neutralise anything that
/// would let the name act as a path or shadow the index file.
pub fn sanitize_submitter_name(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if !cleaned.is_empty() && cleaned.chars().all(|c| c == '.') {
        cleaned.replace('.', "_")
    } else if cleaned.eq_ignore_ascii_case(INDEX_FILE_NAME) {
        // case-insensitive filesystems would still collide
        format!("{cleaned}_")
    } else {
        cleaned
    }
}

/// Human-readable key of a report: timestamp when anonymous, sanitized
/// submitter name otherwise.
pub fn report_label(submitter: &Submitter, received_at: DateTime<Utc>) -> String {
    match submitter {
        Submitter::Anonymous => timestamp_label(received_at),
        Submitter::Named(name) => sanitize_submitter_name(name),
    }
}
