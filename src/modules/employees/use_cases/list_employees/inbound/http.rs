use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::auth::middleware::AuthenticatedUser;
use crate::shell::state::AppState;

pub async fn handle_list(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> impl IntoResponse {
    Json(state.directory.list_employees(claims.tenant_id).await)
}

pub async fn handle_get(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.directory.get_employee(claims.tenant_id, id).await {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
