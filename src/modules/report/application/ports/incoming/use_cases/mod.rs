mod submit_report;

pub use submit_report::{
    SubmitReportCommand, SubmitReportCommandBuilder, SubmitReportCommandError, SubmitReportError,
    SubmitReportResult, SubmitReportUseCase,
};
