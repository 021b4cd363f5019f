use crate::modules::time_entries::core::ports::{
    StoreError, SyncScope, TimeEntryStore, TimesheetGateway,
};
use std::sync::Arc;

/// Outcome of one sync run. `attempted - synced` entries stayed dirty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub attempted: usize,
    pub synced: usize,
}

impl SyncReport {
    pub fn failed(&self) -> usize {
        self.attempted - self.synced
    }
}

pub struct SyncTimeEntriesHandler<TStore, TGateway>
where
    TStore: TimeEntryStore + 'static,
    TGateway: TimesheetGateway + 'static,
{
    store: Arc<TStore>,
    gateway: Arc<TGateway>,
}

impl<TStore, TGateway> SyncTimeEntriesHandler<TStore, TGateway>
where
    TStore: TimeEntryStore + 'static,
    TGateway: TimesheetGateway + 'static,
{
    pub fn new(store: Arc<TStore>, gateway: Arc<TGateway>) -> Self {
        Self { store, gateway }
    }

    /// Pushes every dirty entry in `scope` and commits each success on its
    /// own. A failing entry stays dirty for the next run.
    pub async fn run(&self, scope: SyncScope) -> Result<SyncReport, StoreError> {
        let pending = self.store.list_unsynced(scope).await?;
        let mut report = SyncReport {
            attempted: pending.len(),
            synced: 0,
        };

        for entry in pending {
            if let Err(err) = self.gateway.push(&entry).await {
                tracing::warn!(entry_id = %entry.id, tenant_id = %entry.tenant_id(), %err, "push failed, entry stays dirty");
                continue;
            }
            match self.store.mark_synced(&entry).await {
                Ok(true) => report.synced += 1,
                Ok(false) => {
                    tracing::info!(entry_id = %entry.id, "entry changed during push, left for next sync");
                }
                Err(err) => {
                    tracing::warn!(entry_id = %entry.id, %err, "pushed entry could not be marked synced");
                }
            }
        }

        tracing::info!(?scope, attempted = report.attempted, synced = report.synced, failed = report.failed(), "sync finished");
        Ok(report)
    }
}
