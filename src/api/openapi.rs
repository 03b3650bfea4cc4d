use crate::api::schemas::{ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::report::adapter::incoming::web::routes::{UploadReportRequest, UploadReportResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Incident Report API",
        version = "1.0.0",
        description = "Receives bullying incident reports with captured media and stores them on disk"
    ),
    paths(crate::report::adapter::incoming::web::routes::upload_report_handler),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UploadReportResponse>,
            ErrorResponse,

            // Report DTOs
            UploadReportRequest,
            UploadReportResponse
        )
    ),
    tags(
        (name = "reports", description = "Incident report submission"),
    )
)]
pub struct ApiDoc;
