use std::path::PathBuf;

use crate::report::application::domain::policies::folder_naming::FolderNaming;

#[derive(Debug, Clone)]
pub struct ReportStoragePolicy {
    pub upload_root: PathBuf,
    pub max_media_bytes: u64,
    pub folder_naming: FolderNaming,
    pub verify_media_signature: bool,
}

impl ReportStoragePolicy {
    pub const DEFAULT_UPLOAD_ROOT: &'static str = "uploads";
    pub const DEFAULT_MAX_MEDIA_BYTES: u64 = 50 * 1024 * 1024; // 50MB

    /// Load policy from env vars, falling back to defaults on absent or
    /// unparsable values.
    ///
    /// - `REPORT_UPLOAD_DIR`
    /// - `REPORT_MAX_MEDIA_BYTES`
    /// - `REPORT_FOLDER_NAMING` (`unique` | `legacy`)
    /// - `REPORT_VERIFY_MEDIA_SIGNATURE` (`true` | `false`)
    pub fn from_env() -> Self {
        let upload_root = non_empty_var("REPORT_UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_UPLOAD_ROOT));

        let max_media_bytes = match non_empty_var("REPORT_MAX_MEDIA_BYTES") {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid REPORT_MAX_MEDIA_BYTES={}, using {}",
                    raw,
                    Self::DEFAULT_MAX_MEDIA_BYTES
                );
                Self::DEFAULT_MAX_MEDIA_BYTES
            }),
            None => Self::DEFAULT_MAX_MEDIA_BYTES,
        };

        let folder_naming = match non_empty_var("REPORT_FOLDER_NAMING") {
            Some(raw) => raw.parse::<FolderNaming>().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, FolderNaming::default());
                FolderNaming::default()
            }),
            None => FolderNaming::default(),
        };

        let verify_media_signature = match non_empty_var("REPORT_VERIFY_MEDIA_SIGNATURE") {
            Some(raw) => raw.trim().parse::<bool>().unwrap_or_else(|_| {
                tracing::warn!("Invalid REPORT_VERIFY_MEDIA_SIGNATURE={}, using false", raw);
                false
            }),
            None => false,
        };

        Self {
            upload_root,
            max_media_bytes,
            folder_naming,
            verify_media_signature,
        }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(upload_root: impl Into<PathBuf>) -> Self {
        Self {
            upload_root: upload_root.into(),
            max_media_bytes: Self::DEFAULT_MAX_MEDIA_BYTES,
            folder_naming: FolderNaming::default(),
            verify_media_signature: false,
        }
    }

    pub fn with_folder_naming(mut self, folder_naming: FolderNaming) -> Self {
        self.folder_naming = folder_naming;
        self
    }

    pub fn with_max_media_bytes(mut self, max_media_bytes: u64) -> Self {
        self.max_media_bytes = max_media_bytes;
        self
    }

    pub fn with_signature_verification(mut self, enabled: bool) -> Self {
        self.verify_media_signature = enabled;
        self
    }
}

impl Default for ReportStoragePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UPLOAD_ROOT)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}
