use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::core::views::TimeEntryView;
use crate::shared::auth::middleware::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerParams {
    pub project_name: String,
    pub employee_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(params): Query<StartTimerParams>,
) -> impl IntoResponse {
    let engine = &state.timer_engine;
    engine
        .start_timer(&params.project_name, params.employee_id, claims.tenant_id)
        .await
        .map(|entry| Json(TimeEntryView::at(&entry, engine.now())))
}
