// src/shared/api/multipart_config.rs
use crate::shared::api::ApiResponse;
use actix_multipart::{form::MultipartFormConfig, MultipartError};
use actix_web::{error::PayloadError, http::StatusCode, HttpResponse, ResponseError};

/// Headroom on top of the media limit for the text parts of the form.
const TEXT_FIELDS_ALLOWANCE_BYTES: usize = 1024 * 1024;

pub fn custom_multipart_config(max_media_bytes: u64) -> MultipartFormConfig {
    let limit = usize::try_from(max_media_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(TEXT_FIELDS_ALLOWANCE_BYTES);

    MultipartFormConfig::default()
        .total_limit(limit)
        .memory_limit(limit)
        .error_handler(|err, _req| {
            let response = multipart_error_response(&err);
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

/// Envelope for a multipart extraction failure: oversize bodies are
/// `MEDIA_TOO_LARGE`, everything else (bad or missing content type, broken
/// boundaries, undecodable fields) is `MALFORMED_FORM`.
///
/// Content-type failures are raised before the config's error handler runs,
/// so handlers also call this on the raw extractor error.
pub fn multipart_error_response(err: &MultipartError) -> HttpResponse {
    let message = err.to_string();
    if is_overflow(err) {
        ApiResponse::payload_too_large("MEDIA_TOO_LARGE", &message)
    } else {
        ApiResponse::bad_request("MALFORMED_FORM", &message)
    }
}

fn is_overflow(err: &MultipartError) -> bool {
    matches!(err, MultipartError::Payload(PayloadError::Overflow))
        || err.status_code() == StatusCode::PAYLOAD_TOO_LARGE
}
