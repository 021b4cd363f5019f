// Ports define what the time entry core needs from the outside world.
//
// Responsibilities
// - TimeEntryStore: durable keyed storage of entries, every query scoped by tenant
//   except the explicit all-tenants sync scope.
// - TimesheetGateway: push one entry to the workforce-management API.
//
// Testing guidance
// - The in memory store and scripted gateways in the test fixtures implement these.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::tenant::TenantId;
use crate::shared::infrastructure::remote_api::GatewayError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("entry {id} belongs to another tenant")]
    TenantMismatch { id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Which dirty entries a sync run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncScope {
    Tenant(TenantId),
    AllTenants,
}

#[async_trait]
pub trait TimeEntryStore: Send + Sync {
    /// Inserts or replaces the entry with the same id. Replacing an entry of
    /// another tenant fails with `TenantMismatch`.
    async fn save(&self, entry: &TimeEntry) -> Result<(), StoreError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: &str,
    ) -> Result<Option<TimeEntry>, StoreError>;

    async fn find_open(
        &self,
        tenant_id: TenantId,
        employee_id: i64,
    ) -> Result<Option<TimeEntry>, StoreError>;

    /// Most recent start first.
    async fn list_by_employee(
        &self,
        tenant_id: TenantId,
        employee_id: i64,
    ) -> Result<Vec<TimeEntry>, StoreError>;

    /// Most recent start first.
    async fn list_by_tenant(&self, tenant_id: TenantId) -> Result<Vec<TimeEntry>, StoreError>;

    /// Entries with `synced == false`, oldest start first.
    async fn list_unsynced(&self, scope: SyncScope) -> Result<Vec<TimeEntry>, StoreError>;

    /// Marks the stored entry as synced only if it still equals `pushed`.
    /// Returns `false` when it changed since it was read, leaving it dirty.
    async fn mark_synced(&self, pushed: &TimeEntry) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait TimesheetGateway: Send + Sync {
    async fn push(&self, entry: &TimeEntry) -> Result<(), GatewayError>;
}
