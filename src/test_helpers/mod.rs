use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use std::path::Path;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    removed_entries: u64,
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Remove every stored report and the index, keeping the upload root itself
/// DELETE /test/reports
pub async fn cleanup_reports(data: web::Data<AppState>) -> Result<HttpResponse> {
    let root = &data.report_storage_policy.upload_root;

    match empty_directory(root).await {
        Ok(removed_entries) => {
            tracing::info!("Removed {} entries under {}", removed_entries, root.display());
            Ok(ApiResponse::success(CleanupResponse { removed_entries }))
        }
        Err(e) => {
            tracing::error!("Failed to clean {}: {}", root.display(), e);
            Ok(ApiResponse::internal_error())
        }
    }
}

async fn empty_directory(root: &Path) -> std::io::Result<u64> {
    let mut entries = match tokio::fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut removed = 0;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_dir() {
            tokio::fs::remove_dir_all(&path).await?;
        } else {
            tokio::fs::remove_file(&path).await?;
        }
        removed += 1;
    }
    Ok(removed)
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/reports", web::delete().to(cleanup_reports)),
    );
}
