use axum::{Router, middleware};
use std::sync::Arc;
use std::time::Duration;

use crate::shared::auth::middleware::resolve_credential;
use crate::shared::core::clock::SystemClock;
use crate::shared::infrastructure::remote_api::RemoteApiConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::auth::TEST_JWT_SECRET;

/// Production wiring pointed at `remote_base_url`. `http://127.0.0.1:1`
/// refuses connections, which exercises the offline paths.
pub fn make_test_state(remote_base_url: &str) -> AppState {
    AppState::new(
        &RemoteApiConfig {
            base_url: remote_base_url.to_string(),
            token: None,
            timeout: Duration::from_millis(500),
        },
        TEST_JWT_SECRET,
        Arc::new(SystemClock),
    )
    .unwrap()
}

pub fn with_auth(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(
        state.auth.clone(),
        resolve_credential,
    ))
}
