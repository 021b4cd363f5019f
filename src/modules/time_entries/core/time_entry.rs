use crate::shared::core::tenant::TenantId;
use uuid::Uuid;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// A tracked span of work. `end_time == None` means the timer is running.
///
/// `tenant_id` is assigned once in [`TimeEntry::open`] and has no setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: String,
    tenant_id: TenantId,
    pub employee_id: i64,
    pub project_name: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub description: Option<String>,
    pub billable: bool,
    pub synced: bool,
}

/// Partial edit of an entry; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryChanges {
    pub description: Option<String>,
    pub billable: Option<bool>,
}

impl TimeEntry {
    pub fn open(
        tenant_id: TenantId,
        employee_id: i64,
        project_name: impl Into<String>,
        start_time: i64,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            tenant_id,
            employee_id,
            project_name: project_name.into(),
            start_time,
            end_time: None,
            description: None,
            billable: true,
            synced: false,
        }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// Closes a running entry. Closed entries are left as they are.
    pub fn stop(&mut self, now: i64) {
        if self.is_active() {
            self.end_time = Some(now.max(self.start_time));
            self.synced = false;
        }
    }

    pub fn duration_millis(&self, now: i64) -> i64 {
        (self.end_time.unwrap_or(now) - self.start_time).max(0)
    }

    pub fn duration_minutes(&self, now: i64) -> i64 {
        self.duration_millis(now) / MILLIS_PER_MINUTE
    }

    /// Applies the provided fields and marks the entry for re-sync.
    pub fn apply(&mut self, changes: EntryChanges) {
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(billable) = changes.billable {
            self.billable = billable;
        }
        self.synced = false;
    }

    pub fn mark_synced(&mut self) {
        self.synced = true;
    }
}
