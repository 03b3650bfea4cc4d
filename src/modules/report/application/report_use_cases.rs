use std::sync::Arc;

use crate::report::application::ports::incoming::use_cases::SubmitReportUseCase;

#[derive(Clone)]
pub struct ReportUseCases {
    pub submit: Arc<dyn SubmitReportUseCase + Send + Sync>,
}
