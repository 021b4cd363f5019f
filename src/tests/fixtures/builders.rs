use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::tenant::TenantId;

/// Builds entries in any state, including closed and synced ones, without
/// going through the timer engine.
pub struct TimeEntryBuilder {
    id: Option<String>,
    tenant_id: i64,
    employee_id: i64,
    project_name: String,
    start_time: i64,
    end_time: Option<i64>,
    description: Option<String>,
    billable: bool,
    synced: bool,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            tenant_id: 1,
            employee_id: 7,
            project_name: "ProjectX".to_string(),
            start_time: 1_700_000_000_000,
            end_time: None,
            description: None,
            billable: true,
            synced: false,
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn tenant(mut self, v: i64) -> Self {
        self.tenant_id = v;
        self
    }

    pub fn employee(mut self, v: i64) -> Self {
        self.employee_id = v;
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.project_name = v.into();
        self
    }

    pub fn start(mut self, v: i64) -> Self {
        self.start_time = v;
        self
    }

    pub fn end(mut self, v: i64) -> Self {
        self.end_time = Some(v);
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn billable(mut self, v: bool) -> Self {
        self.billable = v;
        self
    }

    pub fn synced(mut self, v: bool) -> Self {
        self.synced = v;
        self
    }

    pub fn build(self) -> TimeEntry {
        let mut entry = TimeEntry::open(
            TenantId(self.tenant_id),
            self.employee_id,
            self.project_name,
            self.start_time,
        );
        if let Some(id) = self.id {
            entry.id = id;
        }
        entry.end_time = self.end_time;
        entry.description = self.description;
        entry.billable = self.billable;
        entry.synced = self.synced;
        entry
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_an_open_dirty_entry_by_default() {
        let entry = TimeEntryBuilder::default().build();
        assert_eq!(entry.tenant_id(), TenantId(1));
        assert_eq!(entry.employee_id, 7);
        assert!(entry.is_active());
        assert!(!entry.synced);
    }

    #[rstest]
    fn it_should_override_every_field() {
        let entry = TimeEntryBuilder::new()
            .id("te-9")
            .tenant(4)
            .employee(11)
            .project("Audit")
            .start(1_000)
            .end(2_000)
            .description("desc")
            .billable(false)
            .synced(true)
            .build();

        assert_eq!(entry.id, "te-9");
        assert_eq!(entry.tenant_id(), TenantId(4));
        assert_eq!(entry.employee_id, 11);
        assert_eq!(entry.project_name, "Audit");
        assert_eq!(entry.duration_millis(5_000), 1_000);
        assert_eq!(entry.description.as_deref(), Some("desc"));
        assert!(!entry.billable);
        assert!(entry.synced);
    }
}
