use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::core::errors::TimerError;
use crate::modules::time_entries::core::views::TimeEntryView;
use crate::modules::time_entries::use_cases::stop_timer::inbound::http::EmployeeParams;
use crate::shared::auth::middleware::AuthenticatedUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(params): Query<EmployeeParams>,
) -> Result<Response, TimerError> {
    let engine = &state.timer_engine;
    let current = engine
        .get_current_timer(params.employee_id, claims.tenant_id)
        .await?;
    Ok(match current {
        Some(entry) => Json(TimeEntryView::at(&entry, engine.now())).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}
