use async_trait::async_trait;
use uuid::Uuid;

use crate::report::application::ports::incoming::use_cases::{
    SubmitReportCommand, SubmitReportError, SubmitReportResult, SubmitReportUseCase,
};

#[derive(Clone)]
pub struct StubSubmitReportUseCase {
    result: Result<SubmitReportResult, SubmitReportError>,
}

impl StubSubmitReportUseCase {
    pub fn success() -> Self {
        let report_id = Uuid::new_v4();
        Self {
            result: Ok(SubmitReportResult {
                report_id,
                folder_name: report_id.to_string(),
                media_filename: "media.png".to_string(),
            }),
        }
    }

    pub fn storage_error(msg: &str) -> Self {
        Self {
            result: Err(SubmitReportError::StorageError(msg.to_string())),
        }
    }
}

#[async_trait]
impl SubmitReportUseCase for StubSubmitReportUseCase {
    async fn execute(
        &self,
        _command: SubmitReportCommand,
    ) -> Result<SubmitReportResult, SubmitReportError> {
        self.result.clone()
    }
}
