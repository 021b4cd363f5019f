use crate::modules::time_entries::core::ports::TimesheetGateway;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::remote_api::{GatewayError, RemoteApiClient};
use chrono::DateTime;
use serde::Serialize;

const CREATE_TIMESHEET_PATH: &str = "/api/timesheet/create";
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Timesheet line as the workforce-management API expects it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimesheetRequest<'a> {
    entry_id: &'a str,
    employee_id: i64,
    tenant_id: i64,
    project_name: &'a str,
    date: String,
    hours: f64,
    start_time: i64,
    end_time: Option<i64>,
    description: Option<&'a str>,
    billable: bool,
}

impl<'a> From<&'a TimeEntry> for TimesheetRequest<'a> {
    fn from(entry: &'a TimeEntry) -> Self {
        // An open entry has not accrued billable time yet.
        let worked = entry.end_time.unwrap_or(entry.start_time) - entry.start_time;
        let hours = (worked.max(0) as f64 / MILLIS_PER_HOUR * 100.0).round() / 100.0;
        let date = DateTime::from_timestamp_millis(entry.start_time)
            .map(|start| start.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        Self {
            entry_id: &entry.id,
            employee_id: entry.employee_id,
            tenant_id: entry.tenant_id().0,
            project_name: &entry.project_name,
            date,
            hours,
            start_time: entry.start_time,
            end_time: entry.end_time,
            description: entry.description.as_deref(),
            billable: entry.billable,
        }
    }
}

pub struct HttpTimesheetGateway {
    client: RemoteApiClient,
}

impl HttpTimesheetGateway {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl TimesheetGateway for HttpTimesheetGateway {
    async fn push(&self, entry: &TimeEntry) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(CREATE_TIMESHEET_PATH)
            .header("X-Tenant-ID", entry.tenant_id().to_string())
            .json(&TimesheetRequest::from(entry))
            .send()
            .await?;

        match response.status().as_u16() {
            200 | 201 => Ok(()),
            status => Err(GatewayError::Status(status)),
        }
    }
}
