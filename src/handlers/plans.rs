use axum::{extract::State, response::IntoResponse, Json};

use crate::handlers::AppState;
use crate::plans::resolve_catalog;

/// Handle `GET /api/plans`
///
/// JSON view of what the pricing section would show, tagged with its source
pub async fn list_plans(State(state): State<AppState>) -> impl IntoResponse {
    Json(resolve_catalog(&state.loader).await)
}
