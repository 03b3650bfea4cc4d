use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::report::application::{
    domain::entities::{INDEX_FILE_NAME, METADATA_FILE_NAME},
    ports::outgoing::{FolderWriteMode, NewReport, PersistedReport, ReportStore, ReportStoreError},
};

/// One line of `index.jsonl`: maps the folder to its readable label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIndexEntry {
    pub report_id: Uuid,
    pub folder_name: String,
    pub label: String,
    pub received_at: DateTime<Utc>,
    pub media_filename: String,
    pub media_bytes: u64,
    pub media_sha256: String,
}

/// Writes each report as `<root>/<folder>/media<ext>` + `report.json`, and
/// appends an index line under `<root>`.
#[derive(Debug, Clone)]
pub struct LocalReportStore {
    root: PathBuf,
    index_lock: Arc<Mutex<()>>,
}

impl LocalReportStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }

    async fn prepare_folder(
        &self,
        folder_name: &str,
        mode: FolderWriteMode,
    ) -> Result<PathBuf, ReportStoreError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error(&self.root, e))?;

        let dir = self.root.join(folder_name);
        match mode {
            FolderWriteMode::Overwrite => fs::create_dir_all(&dir)
                .await
                .map_err(|e| io_error(&dir, e))?,
            FolderWriteMode::CreateNew => fs::create_dir(&dir).await.map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    ReportStoreError::FolderExists(folder_name.to_string())
                } else {
                    io_error(&dir, e)
                }
            })?,
        }

        Ok(dir)
    }

    async fn append_index(&self, entry: &ReportIndexEntry) -> Result<(), ReportStoreError> {
        let mut line = serde_json::to_vec(entry)
            .map_err(|e| ReportStoreError::Serialization(e.to_string()))?;
        line.push(b'\n');

        let path = self.index_path();
        let _guard = self.index_lock.lock().await;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| io_error(&path, e))?;
        file.write_all(&line).await.map_err(|e| io_error(&path, e))?;
        file.flush().await.map_err(|e| io_error(&path, e))?;

        Ok(())
    }
}

#[async_trait]
impl ReportStore for LocalReportStore {
    async fn persist(&self, report: NewReport) -> Result<PersistedReport, ReportStoreError> {
        let dir = self
            .prepare_folder(&report.folder_name, report.write_mode)
            .await?;

        let media_filename = report.metadata.media_filename.clone();
        let media_path = dir.join(&media_filename);
        fs::write(&media_path, &report.media)
            .await
            .map_err(|e| io_error(&media_path, e))?;

        let metadata_json = serde_json::to_vec_pretty(&report.metadata)
            .map_err(|e| ReportStoreError::Serialization(e.to_string()))?;
        let metadata_path = dir.join(METADATA_FILE_NAME);
        fs::write(&metadata_path, metadata_json)
            .await
            .map_err(|e| io_error(&metadata_path, e))?;

        let entry = ReportIndexEntry {
            report_id: report.report_id,
            folder_name: report.folder_name.clone(),
            label: report.label,
            received_at: report.received_at,
            media_filename: media_filename.clone(),
            media_bytes: report.media.len() as u64,
            media_sha256: format!("{:x}", Sha256::digest(&report.media)),
        };
        if let Err(e) = self.append_index(&entry).await {
            // files are on disk but unlisted
            tracing::error!(
                report_id = %entry.report_id,
                folder = %dir.display(),
                "Report written but index append failed: {}",
                e
            );
            return Err(e);
        }

        tracing::info!(
            report_id = %entry.report_id,
            folder = %entry.folder_name,
            media_bytes = entry.media_bytes,
            "Report persisted"
        );

        Ok(PersistedReport {
            report_id: report.report_id,
            folder_name: report.folder_name,
            media_filename,
        })
    }
}

fn io_error(path: &Path, error: std::io::Error) -> ReportStoreError {
    ReportStoreError::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
