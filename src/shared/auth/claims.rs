// Credential resolution.
//
// Purpose
// - Turn the bearer token of a request into exactly one immutable Credential.
//
// Responsibilities
// - Classify a token as fully authenticated, tenant-only or anonymous.
// - Never fail the request; downstream extractors decide what is allowed.
//
// Boundaries
// - Signature checks live behind the TokenVerifier port.

use crate::shared::core::tenant::TenantId;
use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("missing claim: {0}")]
    MissingClaim(&'static str),

    #[error("token expired")]
    Expired,
}

/// Claims as carried by the token, before any policy is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn authenticate(&self, now_secs: i64) -> Result<AuthClaims, AuthError> {
        if self.exp.is_some_and(|exp| exp <= now_secs) {
            return Err(AuthError::Expired);
        }
        let username = self
            .sub
            .clone()
            .filter(|sub| !sub.trim().is_empty())
            .ok_or(AuthError::MissingClaim("sub"))?;
        let user_id = self.user_id.ok_or(AuthError::MissingClaim("userId"))?;
        let tenant_id = self.tenant_id.ok_or(AuthError::MissingClaim("tenantId"))?;
        Ok(AuthClaims {
            user_id,
            username,
            tenant_id: TenantId(tenant_id),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClaims {
    pub user_id: i64,
    pub username: String,
    pub tenant_id: TenantId,
}

/// Verifies a raw token and yields its claims.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Authenticated(AuthClaims),
    /// Signed token that names a tenant but does not authenticate a user.
    TenantOnly(TenantId),
    Anonymous,
}

impl Credential {
    pub fn resolve(verifier: &dyn TokenVerifier, token: &str, now_secs: i64) -> Self {
        let claims = match verifier.verify(token) {
            Ok(claims) => claims,
            Err(err) => {
                tracing::debug!(%err, "rejected bearer token");
                return Credential::Anonymous;
            }
        };
        match claims.authenticate(now_secs) {
            Ok(auth) => Credential::Authenticated(auth),
            Err(err) => {
                tracing::debug!(%err, "bearer token does not authenticate a user");
                claims
                    .tenant_id
                    .map(|tenant| Credential::TenantOnly(TenantId(tenant)))
                    .unwrap_or(Credential::Anonymous)
            }
        }
    }

    pub fn tenant_id(&self) -> Option<TenantId> {
        match self {
            Credential::Authenticated(claims) => Some(claims.tenant_id),
            Credential::TenantOnly(tenant) => Some(*tenant),
            Credential::Anonymous => None,
        }
    }

    pub fn claims(&self) -> Option<&AuthClaims> {
        match self {
            Credential::Authenticated(claims) => Some(claims),
            _ => None,
        }
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
