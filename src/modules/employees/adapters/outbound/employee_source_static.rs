use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::EmployeeSource;
use crate::shared::core::tenant::TenantId;
use crate::shared::infrastructure::remote_api::GatewayError;

/// Fixed employee list, served to every tenant. Used as the local fallback
/// when the remote directory is unavailable.
#[derive(Debug, Clone)]
pub struct StaticEmployeeSource {
    employees: Vec<Employee>,
}

impl StaticEmployeeSource {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl Default for StaticEmployeeSource {
    fn default() -> Self {
        Self::new(vec![
            Employee::new(1, "John Doe", "john@company.com"),
            Employee::new(2, "Jane Smith", "jane@company.com"),
        ])
    }
}

#[async_trait::async_trait]
impl EmployeeSource for StaticEmployeeSource {
    async fn list(&self, _tenant_id: TenantId) -> Result<Vec<Employee>, GatewayError> {
        Ok(self.employees.clone())
    }
}
