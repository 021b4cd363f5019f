use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::EmployeeSource;
use crate::shared::core::tenant::TenantId;
use crate::shared::infrastructure::remote_api::{GatewayError, RemoteApiClient};

const LIST_EMPLOYEES_PATH: &str = "/api/employee/list-employees";

/// Employee directory of the workforce-management API.
pub struct HttpEmployeeSource {
    client: RemoteApiClient,
}

impl HttpEmployeeSource {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn list(&self, tenant_id: TenantId) -> Result<Vec<Employee>, GatewayError> {
        let response = self
            .client
            .get(LIST_EMPLOYEES_PATH)
            .header("X-Tenant-ID", tenant_id.to_string())
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let employees: Vec<Employee> = response.json().await?;
        tracing::debug!(%tenant_id, count = employees.len(), "fetched employees");
        Ok(employees)
    }
}
