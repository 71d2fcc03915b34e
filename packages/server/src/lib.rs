#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the crash map application.
//!
//! Serves the normalized crash dataset and the trails `GeoJSON` layer for
//! the map frontend, plus the frontend's static files. The backing files
//! live in a directory chosen at startup (`DATA_DIR`) and are re-read on
//! every request; they are small and immutable while the server runs.

mod handlers;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use crash_map_dataset::DatasetStore;

/// Shared application state.
pub struct AppState {
    /// File-backed reader for the crash and trail datasets.
    pub datasets: DatasetStore,
}

/// Starts the crash map API server.
///
/// Reads `DATA_DIR`, `BIND_ADDR`, and `PORT` from the environment (with
/// defaults `data`, `127.0.0.1`, and `8080`), builds the [`DatasetStore`],
/// and runs the Actix-Web HTTP server until shutdown. This is a regular
/// async function; the caller is responsible for providing the async
/// runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    log::info!("Serving datasets from {data_dir}");

    let state = web::Data::new(AppState {
        datasets: DatasetStore::new(data_dir),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/crash-data", web::get().to(handlers::crash_data))
                    .route("/trails", web::get().to(handlers::trails))
                    // Older frontend builds still request this path
                    .route("/data", web::get().to(handlers::crash_data)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
