//! HTTP handler functions for the crash map API.

use actix_web::{HttpResponse, web};
use crash_map_dataset::DatasetError;
use crash_map_server_models::{ApiCrashRecord, ApiHealth};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/crash-data` (also mounted at `GET /api/data`)
///
/// Returns the normalized crash dataset as a JSON array.
pub async fn crash_data(state: web::Data<AppState>) -> HttpResponse {
    match state.datasets.load_crash_data() {
        Ok(records) => {
            let api_records: Vec<ApiCrashRecord> =
                records.into_iter().map(ApiCrashRecord::from).collect();
            HttpResponse::Ok().json(api_records)
        }
        Err(e) => error_response(&e, "crash data"),
    }
}

/// `GET /api/trails`
///
/// Returns the trails feature collection exactly as stored.
pub async fn trails(state: web::Data<AppState>) -> HttpResponse {
    match state.datasets.load_trails() {
        Ok(collection) => HttpResponse::Ok().json(collection),
        Err(e) => error_response(&e, "trail data"),
    }
}

/// Maps a [`DatasetError`] to its HTTP response: 404 when the backing
/// file is missing, 500 for everything else. The payload carries a fixed
/// message; the full error goes to the log only.
fn error_response(err: &DatasetError, what: &str) -> HttpResponse {
    log::error!("Failed to load {what}: {err}");

    match err {
        DatasetError::NotFound { .. } => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("{what} file not found")
        })),
        _ => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to load {what}")
        })),
    }
}
