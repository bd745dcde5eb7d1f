use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("scheduler is empty")]
    EmptyQueue,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
