use axum::{
    Extension, Router, middleware,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::employees::use_cases::list_employees::inbound::http as employees_http;
use crate::modules::time_entries::use_cases::get_current_timer::inbound::http as current_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::start_timer::inbound::http as start_http;
use crate::modules::time_entries::use_cases::stop_timer::inbound::http as stop_http;
use crate::modules::time_entries::use_cases::sync_time_entries::inbound::http as sync_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_http;
use crate::shared::auth::middleware::resolve_credential;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/api/time/start", post(start_http::handle))
        .route("/api/time/stop", post(stop_http::handle))
        .route("/api/time/current", get(current_http::handle))
        .route("/api/time/entries", get(list_http::handle))
        .route("/api/time/entries/all", get(list_http::handle_all))
        .route("/api/time/entries/{id}", put(update_http::handle))
        .route("/api/time/sync", post(sync_http::handle))
        .route("/api/employees", get(employees_http::handle_list))
        .route("/api/employees/{id}", get(employees_http::handle_get))
        .route("/gql", get(graphiql).post(graphql))
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            resolve_credential,
        ))
        .route("/health", get(health))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
