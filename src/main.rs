pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::report;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::report::adapter::outgoing::{LocalReportStore, SystemClock};
use crate::report::application::domain::policies::storage_policy::ReportStoragePolicy;
use crate::report::application::report_use_cases::ReportUseCases;
use crate::report::application::services::SubmitReportService;
use crate::shared::api::custom_multipart_config;

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub report: ReportUseCases,
    pub report_storage_policy: ReportStoragePolicy,
}

#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    if env::var("LOG_FORMAT").as_deref() == Ok("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    // Environtment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    init_tracing();
    info!("Starting application...");

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        if env == "production" {
            panic!("🚨 FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            env
        );
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    let storage_policy = ReportStoragePolicy::from_env();
    tokio::fs::create_dir_all(&storage_policy.upload_root).await?;
    info!(
        upload_root = %storage_policy.upload_root.display(),
        max_media_bytes = storage_policy.max_media_bytes,
        folder_naming = %storage_policy.folder_naming,
        verify_media_signature = storage_policy.verify_media_signature,
        "Report storage configured"
    );

    let report_store = LocalReportStore::new(storage_policy.upload_root.clone());
    let submit_report_service =
        SubmitReportService::new(report_store, SystemClock, storage_policy.folder_naming);

    let state = AppState {
        report: ReportUseCases {
            submit: Arc::new(submit_report_service),
        },
        report_storage_policy: storage_policy,
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_multipart_config(
                state.report_storage_policy.max_media_bytes,
            ))
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Reports
    cfg.service(crate::report::adapter::incoming::web::routes::upload_report_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
