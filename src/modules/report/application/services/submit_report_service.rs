use async_trait::async_trait;
use uuid::Uuid;

use crate::report::application::{
    domain::{
        entities::ReportMetadata,
        policies::folder_naming::{report_label, FolderNaming},
    },
    ports::{
        incoming::use_cases::{
            SubmitReportCommand, SubmitReportError, SubmitReportResult, SubmitReportUseCase,
        },
        outgoing::{Clock, FolderWriteMode, NewReport, ReportStore},
    },
};

pub struct SubmitReportService<S, C>
where
    S: ReportStore,
    C: Clock,
{
    store: S,
    clock: C,
    folder_naming: FolderNaming,
}

impl<S, C> SubmitReportService<S, C>
where
    S: ReportStore,
    C: Clock,
{
    pub fn new(store: S, clock: C, folder_naming: FolderNaming) -> Self {
        Self {
            store,
            clock,
            folder_naming,
        }
    }
}

#[async_trait]
impl<S, C> SubmitReportUseCase for SubmitReportService<S, C>
where
    S: ReportStore + Send + Sync,
    C: Clock + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitReportCommand,
    ) -> Result<SubmitReportResult, SubmitReportError> {
        let received_at = self.clock.now();
        let report_id = Uuid::new_v4();
        let label = report_label(command.submitter(), received_at);

        // Legacy folders are keyed by the label and may be shared by several reports.
        let (folder_name, write_mode) = match self.folder_naming {
            FolderNaming::Unique => (report_id.to_string(), FolderWriteMode::CreateNew),
            FolderNaming::Legacy => (label.clone(), FolderWriteMode::Overwrite),
        };

        let media_filename = command.media_type().media_filename();
        let metadata = ReportMetadata {
            details: command.details().to_string(),
            bully_type: command.bully_type().to_string(),
            date_time: command.date_time().to_string(),
            location: command.location().to_string(),
            anonymous: command.submitter().is_anonymous(),
            name: command.submitter().name().map(str::to_string),
            media_type: command.media_type().to_string(),
            media_filename,
        };

        let persisted = self
            .store
            .persist(NewReport {
                report_id,
                folder_name,
                label,
                received_at,
                write_mode,
                media: command.media().clone(),
                metadata,
            })
            .await
            .map_err(SubmitReportError::from)?;

        Ok(SubmitReportResult {
            report_id: persisted.report_id,
            folder_name: persisted.folder_name,
            media_filename: persisted.media_filename,
        })
    }
}
