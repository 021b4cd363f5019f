use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::core::views::TimeEntryView;
use crate::modules::time_entries::use_cases::stop_timer::inbound::http::EmployeeParams;
use crate::shared::auth::middleware::AuthenticatedUser;
use crate::shell::state::AppState;

fn views(entries: Vec<TimeEntry>, now: i64) -> Json<Vec<TimeEntryView>> {
    Json(entries.iter().map(|entry| TimeEntryView::at(entry, now)).collect())
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(params): Query<EmployeeParams>,
) -> impl IntoResponse {
    let engine = &state.timer_engine;
    engine
        .get_time_entries(params.employee_id, claims.tenant_id)
        .await
        .map(|entries| views(entries, engine.now()))
}

pub async fn handle_all(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> impl IntoResponse {
    let engine = &state.timer_engine;
    engine
        .get_all_time_entries(claims.tenant_id)
        .await
        .map(|entries| views(entries, engine.now()))
}
