use crate::modules::time_entries::core::time_entry::TimeEntry;
use serde::{Deserialize, Serialize};

/// Read model of a time entry as returned by the HTTP and GraphQL surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "TimeEntry")]
pub struct TimeEntryView {
    pub id: String,
    pub tenant_id: i64,
    pub employee_id: i64,
    pub project_name: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub description: Option<String>,
    pub billable: bool,
    pub synced: bool,
    pub active: bool,
    pub duration_minutes: i64,
}

impl TimeEntryView {
    pub fn at(entry: &TimeEntry, now: i64) -> Self {
        Self {
            id: entry.id.clone(),
            tenant_id: entry.tenant_id().0,
            employee_id: entry.employee_id,
            project_name: entry.project_name.clone(),
            start_time: entry.start_time,
            end_time: entry.end_time,
            description: entry.description.clone(),
            billable: entry.billable,
            synced: entry.synced,
            active: entry.is_active(),
            duration_minutes: entry.duration_minutes(now),
        }
    }
}
