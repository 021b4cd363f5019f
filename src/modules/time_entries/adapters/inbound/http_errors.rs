use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::core::errors::TimerError;
use crate::shared::core::tenant::TenantContext;

impl IntoResponse for TimerError {
    fn into_response(self) -> Response {
        match self {
            TimerError::NotFound => StatusCode::NOT_FOUND.into_response(),
            TimerError::InvalidProjectName => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            TimerError::Store(err) => {
                tracing::error!(tenant_id = ?TenantContext::current(), %err, "time entry store failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
