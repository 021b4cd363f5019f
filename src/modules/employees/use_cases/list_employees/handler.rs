use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::EmployeeSource;
use crate::shared::core::tenant::TenantId;
use std::sync::Arc;

/// Two-tier employee directory: the remote source first, the injected
/// fallback when the remote call fails. Fallback data is advisory and may not
/// reflect the live directory.
#[derive(Clone)]
pub struct EmployeeDirectory {
    primary: Arc<dyn EmployeeSource>,
    fallback: Arc<dyn EmployeeSource>,
}

impl EmployeeDirectory {
    pub fn new(primary: Arc<dyn EmployeeSource>, fallback: Arc<dyn EmployeeSource>) -> Self {
        Self { primary, fallback }
    }

    pub async fn list_employees(&self, tenant_id: TenantId) -> Vec<Employee> {
        match self.primary.list(tenant_id).await {
            Ok(employees) => employees,
            Err(err) => {
                tracing::warn!(%tenant_id, %err, "remote employee directory unavailable, using fallback");
                self.fallback.list(tenant_id).await.unwrap_or_else(|err| {
                    tracing::error!(%tenant_id, %err, "fallback employee directory failed");
                    Vec::new()
                })
            }
        }
    }

    pub async fn get_employee(&self, tenant_id: TenantId, id: i64) -> Option<Employee> {
        self.list_employees(tenant_id)
            .await
            .into_iter()
            .find(|employee| employee.id == id)
    }
}
