use duty_core::DutyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] DutyError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
