use crate::shared::auth::claims::{AuthClaims, Credential, TokenVerifier, bearer_token};
use crate::shared::core::clock::Clock;
use crate::shared::core::tenant::TenantContext;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::Instrument;

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub clock: Arc<dyn Clock>,
}

/// Resolves the request credential once, stores it in the request extensions
/// and runs the rest of the request inside the resolved tenant's context.
pub async fn resolve_credential(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let now_secs = auth.clock.now_millis() / 1000;
    let credential = bearer_token(request.headers())
        .map(|token| Credential::resolve(auth.verifier.as_ref(), token, now_secs))
        .unwrap_or(Credential::Anonymous);
    let tenant_id = credential.tenant_id();

    let span = tracing::info_span!(
        "tenant_request",
        tenant_id = tracing::field::debug(tenant_id),
        authenticated = credential.claims().is_some(),
    );
    request.extensions_mut().insert(credential);

    TenantContext::scope(tenant_id, next.run(request))
        .instrument(span)
        .await
}

/// Extractor for endpoints that require a fully authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub AuthClaims);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Credential>() {
            Some(Credential::Authenticated(claims)) => Ok(Self(claims.clone())),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }
}
