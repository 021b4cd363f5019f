use crate::modules::employees::adapters::outbound::employee_source_http::HttpEmployeeSource;
use crate::modules::employees::adapters::outbound::employee_source_static::StaticEmployeeSource;
use crate::modules::employees::use_cases::list_employees::handler::EmployeeDirectory;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::adapters::outbound::timesheet_gateway_http::HttpTimesheetGateway;
use crate::modules::time_entries::core::timer_engine::TimerEngine;
use crate::modules::time_entries::use_cases::sync_time_entries::handler::SyncTimeEntriesHandler;
use crate::shared::auth::jwt::JwtVerifier;
use crate::shared::auth::middleware::AuthState;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::remote_api::{GatewayError, RemoteApiClient, RemoteApiConfig};
use std::sync::Arc;

pub type SyncHandler = SyncTimeEntriesHandler<InMemoryTimeEntryStore, HttpTimesheetGateway>;

#[derive(Clone)]
pub struct AppState {
    pub timer_engine: Arc<TimerEngine<InMemoryTimeEntryStore>>,
    pub sync_handler: Arc<SyncHandler>,
    pub directory: Arc<EmployeeDirectory>,
    pub auth: AuthState,
}

impl AppState {
    /// Wires the in-memory store to the remote workforce API.
    pub fn new(
        remote_api: &RemoteApiConfig,
        jwt_secret: &[u8],
        clock: Arc<dyn Clock>,
    ) -> Result<Self, GatewayError> {
        let client = RemoteApiClient::new(remote_api)?;
        let store = Arc::new(InMemoryTimeEntryStore::new());

        let directory = Arc::new(EmployeeDirectory::new(
            Arc::new(HttpEmployeeSource::new(client.clone())),
            Arc::new(StaticEmployeeSource::default()),
        ));
        let timer_engine = Arc::new(TimerEngine::new(
            store.clone(),
            directory.clone(),
            clock.clone(),
        ));
        let sync_handler = Arc::new(SyncTimeEntriesHandler::new(
            store,
            Arc::new(HttpTimesheetGateway::new(client)),
        ));

        Ok(Self {
            timer_engine,
            sync_handler,
            directory,
            auth: AuthState {
                verifier: Arc::new(JwtVerifier::hs256(jwt_secret)),
                clock,
            },
        })
    }
}
