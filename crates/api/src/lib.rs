//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for years and per-year budget breakdowns
//! - A health endpoint
//! - Query error to HTTP response mapping

pub mod routes;

use axum::Router;
use std::sync::Arc;
use taxlens_core::BudgetQueryService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only budget lookups, built once at startup.
    pub budget: Arc<BudgetQueryService>,
}

impl AppState {
    /// Wraps a loaded query service for sharing across handlers.
    #[must_use]
    pub fn new(budget: BudgetQueryService) -> Self {
        Self {
            budget: Arc::new(budget),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
