//! Scheduler error types

use lotclock_domain::LotclockError;
use thiserror::Error;

/// Scheduler-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// A running countdown needs a tokio runtime to drive its ticks
    #[error("No tokio runtime available to drive the countdown")]
    NoRuntime,
}

impl From<SchedulerError> for LotclockError {
    fn from(err: SchedulerError) -> Self {
        match err {
            SchedulerError::NoRuntime => Self::Runtime(err.to_string()),
        }
    }
}

/// Convenience type alias for scheduler operations
pub type SchedulerResult<T> = Result<T, SchedulerError>;
