use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::modules::time_entries::core::ports::{SyncScope, TimeEntryStore, TimesheetGateway};
use crate::modules::time_entries::use_cases::sync_time_entries::handler::SyncTimeEntriesHandler;

/// Periodically pushes dirty entries of every tenant. The first run happens
/// one `period` after spawning.
pub fn spawn_sync_worker<TStore, TGateway>(
    handler: Arc<SyncTimeEntriesHandler<TStore, TGateway>>,
    period: Duration,
) -> JoinHandle<()>
where
    TStore: TimeEntryStore + 'static,
    TGateway: TimesheetGateway + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(err) = handler.run(SyncScope::AllTenants).await {
                tracing::error!(%err, "scheduled sync could not list dirty entries");
            }
        }
    })
}
