use crate::modules::time_entries::core::ports::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimerError {
    /// No matching timer or entry for the caller's tenant. Entries owned by
    /// another tenant are reported the same way.
    #[error("time entry not found")]
    NotFound,

    #[error("project name cannot be empty")]
    InvalidProjectName,

    #[error(transparent)]
    Store(#[from] StoreError),
}
