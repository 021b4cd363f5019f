// Timer state machine.
//
// Purpose
// - Start, stop, inspect and edit time entries for one tenant at a time.
//
// Responsibilities
// - Keep at most one open entry per (tenant, employee): starting a timer closes the running one.
// - Serialize start, stop and update of the same (tenant, employee) so concurrent calls cannot race.
// - Mark entries dirty whenever they change so the sync pipeline pushes them again.
//
// Boundaries
// - Persistence goes through TimeEntryStore; the employee directory is advisory only.

use crate::modules::employees::use_cases::list_employees::handler::EmployeeDirectory;
use crate::modules::time_entries::core::errors::TimerError;
use crate::modules::time_entries::core::ports::TimeEntryStore;
use crate::modules::time_entries::core::time_entry::{EntryChanges, TimeEntry};
use crate::shared::core::clock::Clock;
use crate::shared::core::tenant::TenantId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockKey = (TenantId, i64);

/// One async mutex per (tenant, employee), created on first use and dropped
/// from the registry once nobody holds or waits for it.
#[derive(Default)]
struct EmployeeLocks {
    inner: Mutex<HashMap<LockKey, Arc<AsyncMutex<()>>>>,
}

impl EmployeeLocks {
    async fn acquire(&self, tenant_id: TenantId, employee_id: i64) -> EmployeeLockGuard<'_> {
        let key = (tenant_id, employee_id);
        let lock = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_default()
            .clone();
        EmployeeLockGuard {
            guard: Some(lock.lock_owned().await),
            locks: self,
            key,
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

struct EmployeeLockGuard<'a> {
    guard: Option<OwnedMutexGuard<()>>,
    locks: &'a EmployeeLocks,
    key: LockKey,
}

impl Drop for EmployeeLockGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        let mut registry = self
            .locks
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Waiters hold their own clone, so a count of one means the slot is idle.
        if registry
            .get(&self.key)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            registry.remove(&self.key);
        }
    }
}

pub struct TimerEngine<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    store: Arc<TStore>,
    directory: Arc<EmployeeDirectory>,
    clock: Arc<dyn Clock>,
    locks: EmployeeLocks,
}

impl<TStore> TimerEngine<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        directory: Arc<EmployeeDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            directory,
            clock,
            locks: EmployeeLocks::default(),
        }
    }

    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    pub async fn start_timer(
        &self,
        project_name: &str,
        employee_id: i64,
        tenant_id: TenantId,
    ) -> Result<TimeEntry, TimerError> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(TimerError::InvalidProjectName);
        }
        self.check_employee(tenant_id, employee_id);

        let _guard = self.locks.acquire(tenant_id, employee_id).await;
        let now = self.clock.now_millis();

        if let Some(mut running) = self.store.find_open(tenant_id, employee_id).await? {
            running.stop(now);
            self.store.save(&running).await?;
            tracing::info!(%tenant_id, employee_id, entry_id = %running.id, "auto-stopped running timer");
        }

        let entry = TimeEntry::open(tenant_id, employee_id, project_name, now);
        self.store.save(&entry).await?;
        tracing::info!(%tenant_id, employee_id, entry_id = %entry.id, project = %entry.project_name, "timer started");
        Ok(entry)
    }

    pub async fn stop_timer(
        &self,
        employee_id: i64,
        tenant_id: TenantId,
    ) -> Result<TimeEntry, TimerError> {
        let _guard = self.locks.acquire(tenant_id, employee_id).await;

        let mut entry = self
            .store
            .find_open(tenant_id, employee_id)
            .await?
            .ok_or(TimerError::NotFound)?;
        entry.stop(self.clock.now_millis());
        self.store.save(&entry).await?;
        tracing::info!(%tenant_id, employee_id, entry_id = %entry.id, "timer stopped");
        Ok(entry)
    }

    pub async fn get_current_timer(
        &self,
        employee_id: i64,
        tenant_id: TenantId,
    ) -> Result<Option<TimeEntry>, TimerError> {
        Ok(self.store.find_open(tenant_id, employee_id).await?)
    }

    pub async fn get_time_entries(
        &self,
        employee_id: i64,
        tenant_id: TenantId,
    ) -> Result<Vec<TimeEntry>, TimerError> {
        Ok(self.store.list_by_employee(tenant_id, employee_id).await?)
    }

    pub async fn get_all_time_entries(
        &self,
        tenant_id: TenantId,
    ) -> Result<Vec<TimeEntry>, TimerError> {
        Ok(self.store.list_by_tenant(tenant_id).await?)
    }

    pub async fn update_entry(
        &self,
        id: &str,
        changes: EntryChanges,
        tenant_id: TenantId,
    ) -> Result<TimeEntry, TimerError> {
        let employee_id = self
            .store
            .find_by_id(tenant_id, id)
            .await?
            .ok_or(TimerError::NotFound)?
            .employee_id;

        let _guard = self.locks.acquire(tenant_id, employee_id).await;
        // Re-read under the lock: a concurrent stop may have closed the entry.
        let mut entry = self
            .store
            .find_by_id(tenant_id, id)
            .await?
            .ok_or(TimerError::NotFound)?;
        entry.apply(changes);
        self.store.save(&entry).await?;
        tracing::info!(%tenant_id, entry_id = %entry.id, "time entry updated");
        Ok(entry)
    }

    /// Looks the employee up in the background; an unknown employee is only
    /// reported, so the start never waits on the remote directory.
    fn check_employee(&self, tenant_id: TenantId, employee_id: i64) {
        let directory = self.directory.clone();
        tokio::spawn(async move {
            if directory.get_employee(tenant_id, employee_id).await.is_none() {
                tracing::warn!(%tenant_id, employee_id, "timer started for an employee missing from the directory");
            }
        });
    }
}
