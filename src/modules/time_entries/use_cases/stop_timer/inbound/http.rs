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
pub struct EmployeeParams {
    pub employee_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(params): Query<EmployeeParams>,
) -> impl IntoResponse {
    let engine = &state.timer_engine;
    engine
        .stop_timer(params.employee_id, claims.tenant_id)
        .await
        .map(|entry| Json(TimeEntryView::at(&entry, engine.now())))
}

#[cfg(test)]
mod stop_timer_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::handle;
    use crate::shared::core::tenant::TenantId;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::auth::bearer_for;
    use crate::tests::fixtures::state::{make_test_state, with_auth};

    fn app(state: AppState) -> Router {
        with_auth(Router::new().route("/api/time/stop", post(handle)), &state).with_state(state)
    }

    fn stop(employee_id: i64, tenant: i64) -> Request<Body> {
        Request::post(format!("/api/time/stop?employeeId={employee_id}"))
            .header("authorization", bearer_for(employee_id, "jane", tenant))
            .body(Body::empty())
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_close_the_running_entry() {
        let state = make_test_state("http://127.0.0.1:1");
        let started = state
            .timer_engine
            .start_timer("ProjectX", 7, TenantId(1))
            .await
            .unwrap();

        let response = app(state).oneshot(stop(7, 1)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["id"], started.id.as_str());
        assert_eq!(json["active"], false);
        assert!(json["endTime"].is_i64());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_when_no_timer_runs_for_the_tenant() {
        let state = make_test_state("http://127.0.0.1:1");
        state
            .timer_engine
            .start_timer("ProjectX", 7, TenantId(2))
            .await
            .unwrap();

        let response = app(state).oneshot(stop(7, 1)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
