mod submit_report_service;

pub use submit_report_service::SubmitReportService;
