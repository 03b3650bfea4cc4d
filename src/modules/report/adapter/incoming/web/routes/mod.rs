mod upload_report;

pub use upload_report::{
    __path_upload_report_handler, upload_report_handler, UploadReportRequest,
    UploadReportResponse,
};
