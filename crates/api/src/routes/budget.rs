//! Budget allocation routes.
//!
//! - `GET /years` - every loaded year, ascending
//! - `GET /budget/{year}` - sector breakdown for one year

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::debug;

use crate::AppState;
use taxlens_core::QueryError;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/years", get(list_years))
        .route("/budget/{year}", get(get_budget))
}

/// GET `/years` - List available years.
async fn list_years(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.budget.list_years())
}

/// GET `/budget/{year}` - Get the sector breakdown for a year.
async fn get_budget(State(state): State<AppState>, Path(year): Path<String>) -> Response {
    match state.budget.get_budget(&year) {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            debug!(error = %e, "Budget lookup missed");
            map_query_error(&e)
        }
    }
}

/// Maps query errors to HTTP responses.
fn map_query_error(e: &QueryError) -> Response {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match e {
        QueryError::YearNotFound { year } => (
            status,
            Json(json!({
                "error": e.error_code(),
                "message": e.to_string(),
                "year": year
            })),
        )
            .into_response(),
    }
}
