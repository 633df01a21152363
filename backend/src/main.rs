//! Main entry point for the accounts backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall
//! structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod utils;

use crate::api::common::ApiResponse;
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use database::Database;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/users", auth::routes::user_router())
        .layer(CorsLayer::permissive())
        .layer(Extension(pool))
        .layer(Extension(config.clone()));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting accounts server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Accounts Backend",
            "version": "0.1.0"
        }),
        "Welcome to the Accounts API",
    ))
}
