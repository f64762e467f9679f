use duty_core::DutyError;
use duty_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    /// An override-mode string that is none of the three known variants.
    /// Never coerced to a default — the store must be validated on write.
    #[error("unknown override mode {0:?}")]
    UnknownMode(String),

    #[error("controller configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] DutyError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("mode store error: {0}")]
    Store(String),

    #[error("clock error: {0}")]
    Clock(String),

    #[error("actuator error: {0}")]
    Actuator(String),
}

pub type ControlResult<T> = Result<T, ControlError>;
