use crate::report::application::domain::policies::storage_policy::ReportStoragePolicy;
use crate::report::application::ports::incoming::use_cases::SubmitReportUseCase;
use crate::report::application::report_use_cases::ReportUseCases;
use crate::tests::support::stubs::StubSubmitReportUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    submit_report: Option<Arc<dyn SubmitReportUseCase + Send + Sync>>,
    storage_policy: ReportStoragePolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            submit_report: Some(Arc::new(StubSubmitReportUseCase::success())),
            storage_policy: ReportStoragePolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_submit_report(
        mut self,
        uc: impl SubmitReportUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_report = Some(Arc::new(uc));
        self
    }

    pub fn with_storage_policy(mut self, policy: ReportStoragePolicy) -> Self {
        self.storage_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            report: ReportUseCases {
                submit: self
                    .submit_report
                    .unwrap_or_else(|| Arc::new(StubSubmitReportUseCase::success())),
            },
            report_storage_policy: self.storage_policy,
        })
    }
}
