//! HTTP Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/assess/` - Assess an uploaded document against guidelines
//! - `/modify/` - Rewrite an uploaded document on request
//! - `/api/health` - Health checks
//! - `/` - Browser control panel

pub mod documents;
pub mod health;
pub mod ui;

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;
use crate::types::AppError;

/// Create the main application router
///
/// Panics inside a handler are turned into a 500 with the panic message,
/// requests are traced, and CORS follows `ALLOWED_ORIGINS`.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .merge(documents::router(state.clone()))
        .merge(health::router(state))
        .merge(ui::router())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(message).into_response()
}
