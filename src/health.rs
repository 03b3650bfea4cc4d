use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::path::Path;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    storage: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Upload root exists (created if missing) and is writable
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let storage_status = match check_upload_root(&data.report_storage_policy.upload_root).await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("Upload root not ready: {}", e);
            "unhealthy"
        }
    };

    if storage_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: storage_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            storage: storage_status,
        })
    }
}

async fn check_upload_root(root: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(root).await?;
    let metadata = tokio::fs::metadata(root).await?;
    if !metadata.is_dir() || metadata.permissions().readonly() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("{} is not a writable directory", root.display()),
        ));
    }
    Ok(())
}
