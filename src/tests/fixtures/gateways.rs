use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::EmployeeSource;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::core::ports::{TimeEntryStore, TimesheetGateway};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::tenant::TenantId;
use crate::shared::infrastructure::remote_api::GatewayError;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Timesheet gateway that rejects a fixed set of entry ids and counts calls.
#[derive(Default)]
pub struct ScriptedTimesheetGateway {
    failing: HashSet<String>,
    calls: AtomicUsize,
    concurrent_edit: Option<(Arc<InMemoryTimeEntryStore>, TimeEntry)>,
}

impl ScriptedTimesheetGateway {
    pub fn failing_for(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            failing: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Saves `edited` into `store` while the push is in flight.
    pub fn saving_during_push(
        mut self,
        store: Arc<InMemoryTimeEntryStore>,
        edited: TimeEntry,
    ) -> Self {
        self.concurrent_edit = Some((store, edited));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TimesheetGateway for ScriptedTimesheetGateway {
    async fn push(&self, entry: &TimeEntry) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((store, edited)) = &self.concurrent_edit {
            store
                .save(edited)
                .await
                .map_err(|err| GatewayError::Transport(err.to_string()))?;
        }
        if self.failing.contains(&entry.id) {
            return Err(GatewayError::Status(503));
        }
        Ok(())
    }
}

/// Employee source whose remote is always down.
pub struct UnavailableEmployeeSource;

#[async_trait::async_trait]
impl EmployeeSource for UnavailableEmployeeSource {
    async fn list(&self, _tenant_id: TenantId) -> Result<Vec<Employee>, GatewayError> {
        Err(GatewayError::Transport("connection refused".into()))
    }
}

/// Employee source that never answers in a useful time.
pub struct StalledEmployeeSource;

#[async_trait::async_trait]
impl EmployeeSource for StalledEmployeeSource {
    async fn list(&self, _tenant_id: TenantId) -> Result<Vec<Employee>, GatewayError> {
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        Err(GatewayError::Timeout)
    }
}
