use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::core::ports::SyncScope;
use crate::shared::auth::middleware::AuthenticatedUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Response {
    match state
        .sync_handler
        .run(SyncScope::Tenant(claims.tenant_id))
        .await
    {
        Ok(report) => format!("Synced {} entries", report.synced).into_response(),
        Err(err) => {
            tracing::error!(tenant_id = %claims.tenant_id, %err, "sync could not list dirty entries");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
