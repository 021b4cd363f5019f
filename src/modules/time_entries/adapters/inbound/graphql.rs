use async_graphql::{Context, Error, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::employees::core::employee::Employee;
use crate::modules::time_entries::core::errors::TimerError;
use crate::modules::time_entries::core::ports::SyncScope;
use crate::modules::time_entries::core::time_entry::{EntryChanges, TimeEntry};
use crate::modules::time_entries::core::views::TimeEntryView;
use crate::shared::auth::claims::{AuthClaims, Credential};
use crate::shell::state::AppState;

fn caller(context: &Context<'_>) -> GqlResult<AuthClaims> {
    match context.data_opt::<Credential>().and_then(Credential::claims) {
        Some(claims) => Ok(claims.clone()),
        None => Err(Error::new("unauthorized").extend_with(|_, e| e.set("code", 401))),
    }
}

fn to_gql(err: TimerError) -> Error {
    let code = match &err {
        TimerError::NotFound => 404,
        TimerError::InvalidProjectName => 400,
        TimerError::Store(store) => {
            tracing::error!(err = %store, "time entry store failure");
            500
        }
    };
    Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

fn view(state: &AppState, entry: &TimeEntry) -> TimeEntryView {
    TimeEntryView::at(entry, state.timer_engine.now())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn current_timer(
        &self,
        context: &Context<'_>,
        employee_id: i64,
    ) -> GqlResult<Option<TimeEntryView>> {
        let claims = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let current = state
            .timer_engine
            .get_current_timer(employee_id, claims.tenant_id)
            .await
            .map_err(to_gql)?;
        Ok(current.map(|entry| view(state, &entry)))
    }

    async fn time_entries(
        &self,
        context: &Context<'_>,
        employee_id: Option<i64>,
    ) -> GqlResult<Vec<TimeEntryView>> {
        let claims = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let engine = &state.timer_engine;
        let entries = match employee_id {
            Some(employee_id) => engine.get_time_entries(employee_id, claims.tenant_id).await,
            None => engine.get_all_time_entries(claims.tenant_id).await,
        }
        .map_err(to_gql)?;
        Ok(entries.iter().map(|entry| view(state, entry)).collect())
    }

    async fn employees(&self, context: &Context<'_>) -> GqlResult<Vec<Employee>> {
        let claims = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        Ok(state.directory.list_employees(claims.tenant_id).await)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn start_timer(
        &self,
        context: &Context<'_>,
        project_name: String,
        employee_id: i64,
    ) -> GqlResult<TimeEntryView> {
        let claims = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .timer_engine
            .start_timer(&project_name, employee_id, claims.tenant_id)
            .await
            .map_err(to_gql)?;
        Ok(view(state, &entry))
    }

    async fn stop_timer(&self, context: &Context<'_>, employee_id: i64) -> GqlResult<TimeEntryView> {
        let claims = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .timer_engine
            .stop_timer(employee_id, claims.tenant_id)
            .await
            .map_err(to_gql)?;
        Ok(view(state, &entry))
    }

    async fn update_time_entry(
        &self,
        context: &Context<'_>,
        id: String,
        description: Option<String>,
        billable: Option<bool>,
    ) -> GqlResult<TimeEntryView> {
        let claims = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .timer_engine
            .update_entry(
                &id,
                EntryChanges {
                    description,
                    billable,
                },
                claims.tenant_id,
            )
            .await
            .map_err(to_gql)?;
        Ok(view(state, &entry))
    }

    /// Returns the number of entries pushed.
    async fn sync_time_entries(&self, context: &Context<'_>) -> GqlResult<i64> {
        let claims = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let report = state
            .sync_handler
            .run(SyncScope::Tenant(claims.tenant_id))
            .await
            .map_err(|err| to_gql(TimerError::Store(err)))?;
        Ok(report.synced as i64)
    }
}
