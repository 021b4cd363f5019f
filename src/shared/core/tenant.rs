// Request-scoped tenant context.
//
// Purpose
// - Make the tenant of the current request readable anywhere inside that request.
//
// Responsibilities
// - Bind the tenant to the task running the request, never to the process.
// - Release the binding when the scoped future completes, fails, panics or is dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub i64);

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

tokio::task_local! {
    static CURRENT_TENANT: Option<TenantId>;
}

pub struct TenantContext;

impl TenantContext {
    /// Runs `future` with `tenant` as the current tenant. The binding only
    /// exists while `future` is being polled.
    pub async fn scope<F>(tenant: Option<TenantId>, future: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_TENANT.scope(tenant, future).await
    }

    /// Current tenant, or `None` outside of a scope.
    pub fn current() -> Option<TenantId> {
        CURRENT_TENANT.try_with(|tenant| *tenant).ok().flatten()
    }
}
