// In memory implementation of the TimeEntryStore port.
//
// Purpose
// - Run the service and its tests without a database.
//
// Responsibilities
// - Keep entries in a map keyed by entry id.
// - Filter every query by tenant.
// - Simulate an offline backend and slow reads for failure and race tests.

use crate::modules::time_entries::core::ports::{StoreError, SyncScope, TimeEntryStore};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::tenant::TenantId;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    entries: RwLock<HashMap<String, TimeEntry>>,
    is_offline: bool,
    read_delay_ms: AtomicU64,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays `find_open` and `find_by_id` to widen the window between a
    /// read and the following write.
    pub fn set_delay_read_ms(&self, ms: u64) {
        self.read_delay_ms.store(ms, Ordering::SeqCst);
    }

    async fn read_delay(&self) {
        let delay = self.read_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Time entry store offline".into()));
        }
        Ok(())
    }

    async fn select(&self, predicate: impl Fn(&TimeEntry) -> bool) -> Vec<TimeEntry> {
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn save(&self, entry: &TimeEntry) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        if let Some(existing) = guard.get(&entry.id)
            && existing.tenant_id() != entry.tenant_id()
        {
            return Err(StoreError::TenantMismatch {
                id: entry.id.clone(),
            });
        }
        guard.insert(entry.id.clone(), entry.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: &str,
    ) -> Result<Option<TimeEntry>, StoreError> {
        self.ensure_online()?;
        self.read_delay().await;
        Ok(self
            .entries
            .read()
            .await
            .get(id)
            .filter(|entry| entry.tenant_id() == tenant_id)
            .cloned())
    }

    async fn find_open(
        &self,
        tenant_id: TenantId,
        employee_id: i64,
    ) -> Result<Option<TimeEntry>, StoreError> {
        self.ensure_online()?;
        self.read_delay().await;
        let mut open = self
            .select(|entry| {
                entry.tenant_id() == tenant_id
                    && entry.employee_id == employee_id
                    && entry.is_active()
            })
            .await;
        open.sort_by_key(|entry| Reverse(entry.start_time));
        Ok(open.into_iter().next())
    }

    async fn list_by_employee(
        &self,
        tenant_id: TenantId,
        employee_id: i64,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let mut items = self
            .select(|entry| entry.tenant_id() == tenant_id && entry.employee_id == employee_id)
            .await;
        items.sort_by_key(|entry| Reverse(entry.start_time));
        Ok(items)
    }

    async fn list_by_tenant(&self, tenant_id: TenantId) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let mut items = self.select(|entry| entry.tenant_id() == tenant_id).await;
        items.sort_by_key(|entry| Reverse(entry.start_time));
        Ok(items)
    }

    async fn list_unsynced(&self, scope: SyncScope) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let mut items = self
            .select(|entry| {
                !entry.synced
                    && match scope {
                        SyncScope::Tenant(tenant_id) => entry.tenant_id() == tenant_id,
                        SyncScope::AllTenants => true,
                    }
            })
            .await;
        items.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn mark_synced(&self, pushed: &TimeEntry) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        match guard.get_mut(&pushed.id) {
            Some(stored) if stored == pushed => {
                stored.mark_synced();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
