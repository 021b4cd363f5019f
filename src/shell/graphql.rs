use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

pub use crate::modules::time_entries::adapters::inbound::graphql::{MutationRoot, QueryRoot};
use crate::shared::auth::claims::Credential;
use crate::shared::auth::middleware::AuthenticatedUser;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Executes a GraphQL request for an authenticated caller; anyone else gets 401.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    AuthenticatedUser(claims): AuthenticatedUser,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema
        .execute(
            request
                .into_inner()
                .data(Credential::Authenticated(claims)),
        )
        .await
        .into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
