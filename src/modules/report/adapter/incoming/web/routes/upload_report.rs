// src/modules/report/adapter/incoming/web/routes/upload_report.rs

use actix_multipart::form::{bytes::Bytes as MultipartBytes, text::Text, MultipartForm};
use actix_multipart::MultipartError;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::report::application::ports::incoming::use_cases::{
    SubmitReportCommand, SubmitReportCommandError, SubmitReportError,
};
use crate::shared::api::{multipart_error_response, ApiResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request Form
// ──────────────────────────────────────────────────────────
//

/// Every key is optional at extraction time; presence is decided by the
/// command builder so that all missing keys are reported together.
#[derive(MultipartForm)]
pub struct UploadReportForm {
    pub media: Option<MultipartBytes>,
    #[multipart(rename = "type")]
    pub media_type: Option<Text<String>>,
    pub details: Option<Text<String>>,
    #[multipart(rename = "bullyType")]
    pub bully_type: Option<Text<String>>,
    #[multipart(rename = "dateTime")]
    pub date_time: Option<Text<String>>,
    pub location: Option<Text<String>>,
    pub anonymous: Option<Text<String>>,
    pub name: Option<Text<String>>,
}

/// Documentation shape of the multipart body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadReportRequest {
    /// Captured picture, audio or video recording
    #[schema(value_type = String, format = Binary)]
    pub media: Vec<u8>,
    /// Declared media kind
    #[serde(rename = "type")]
    #[schema(example = "picture")]
    pub media_type: String,
    #[schema(example = "Pushed in the hallway")]
    pub details: String,
    #[schema(example = "Verbal")]
    pub bully_type: String,
    #[schema(example = "2024-01-01T10:00")]
    pub date_time: String,
    #[schema(example = "Hall")]
    pub location: String,
    /// `"true"` keeps the submitter name out of the stored report
    #[schema(example = "true")]
    pub anonymous: Option<String>,
    /// Required when not anonymous
    pub name: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadReportResponse {
    pub report_id: Uuid,
    pub folder_name: String,
    pub media_filename: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Submit an incident report
///
/// Stores the media and a `report.json` sidecar in a new folder under the
/// upload root.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "reports",
    request_body(content = UploadReportRequest, content_type = "multipart/form-data"),
    responses(
        (
            status = 200,
            description = "Report stored",
            body = inline(SuccessResponse<UploadReportResponse>),
            example = json!({
                "success": true,
                "data": {
                    "reportId": "123e4567-e89b-12d3-a456-426614174000",
                    "folderName": "123e4567-e89b-12d3-a456-426614174000",
                    "mediaFilename": "media.png"
                }
            })
        ),
        (
            status = 400,
            description = "Missing fields or malformed form",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "code": "MISSING_FIELDS",
                "error": "Missing fields",
                "fields": ["media", "location"]
            })
        ),
        (status = 413, description = "Media too large", body = ErrorResponse),
        (status = 415, description = "Media bytes do not match declared type", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[post("/api/upload")]
pub async fn upload_report_handler(
    data: web::Data<AppState>,
    form: Result<MultipartForm<UploadReportForm>, actix_web::Error>,
) -> impl Responder {
    let form = match form {
        Ok(MultipartForm(form)) => form,
        Err(e) => return map_extraction_error(e),
    };
    let policy = &data.report_storage_policy;

    let command = match SubmitReportCommand::builder()
        .media(form.media.map(|m| m.data))
        .media_type(form.media_type.map(Text::into_inner))
        .details(form.details.map(Text::into_inner))
        .bully_type(form.bully_type.map(Text::into_inner))
        .date_time(form.date_time.map(Text::into_inner))
        .location(form.location.map(Text::into_inner))
        .anonymous(form.anonymous.map(Text::into_inner))
        .name(form.name.map(Text::into_inner))
        .build(policy)
    {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.report.submit.execute(command).await {
        Ok(result) => ApiResponse::success(UploadReportResponse {
            report_id: result.report_id,
            folder_name: result.folder_name,
            media_filename: result.media_filename,
        }),

        Err(SubmitReportError::StorageError(e)) => {
            error!("Storage error persisting report: {}", e);
            ApiResponse::internal_error()
        }

        Err(SubmitReportError::FolderCollision(folder)) => {
            error!("Report folder already exists: {}", folder);
            ApiResponse::internal_error()
        }
    }
}

/// Errors already shaped by the multipart config pass through unchanged.
fn map_extraction_error(e: actix_web::Error) -> HttpResponse {
    match e.as_error::<MultipartError>() {
        Some(err) => multipart_error_response(err),
        None => e.error_response(),
    }
}

fn map_command_error(e: SubmitReportCommandError) -> HttpResponse {
    match e {
        SubmitReportCommandError::MissingFields(fields) => ApiResponse::missing_fields(&fields),
        SubmitReportCommandError::MediaTooLarge {
            max_bytes,
            actual_bytes,
        } => ApiResponse::payload_too_large(
            "MEDIA_TOO_LARGE",
            &format!(
                "Media too large (max {} bytes, got {} bytes)",
                max_bytes, actual_bytes
            ),
        ),
        SubmitReportCommandError::MediaSignatureMismatch { media_type } => {
            ApiResponse::unsupported_media_type(
                "MEDIA_SIGNATURE_MISMATCH",
                &format!("Media content does not match declared type {}", media_type),
            )
        }
    }
}
