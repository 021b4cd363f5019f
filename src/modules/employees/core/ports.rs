use crate::modules::employees::core::employee::Employee;
use crate::shared::core::tenant::TenantId;
use crate::shared::infrastructure::remote_api::GatewayError;
use async_trait::async_trait;

/// One tier of the employee directory.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn list(&self, tenant_id: TenantId) -> Result<Vec<Employee>, GatewayError>;
}
