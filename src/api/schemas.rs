// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Error code for programmatic handling
    #[schema(example = "MISSING_FIELDS")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Missing fields")]
    pub error: String,

    /// Names of the absent form fields, only for `MISSING_FIELDS`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = json!(["media", "location"]))]
    pub fields: Option<Vec<String>>,
}
