use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::core::time_entry::EntryChanges;
use crate::modules::time_entries::core::views::TimeEntryView;
use crate::shared::auth::middleware::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryParams {
    pub description: Option<String>,
    pub billable: Option<bool>,
}

impl From<UpdateEntryParams> for EntryChanges {
    fn from(params: UpdateEntryParams) -> Self {
        Self {
            description: params.description,
            billable: params.billable,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    Query(params): Query<UpdateEntryParams>,
) -> impl IntoResponse {
    let engine = &state.timer_engine;
    engine
        .update_entry(&id, params.into(), claims.tenant_id)
        .await
        .map(|entry| Json(TimeEntryView::at(&entry, engine.now())))
}
