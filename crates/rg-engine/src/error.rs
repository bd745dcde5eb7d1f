use rg_core::CoreError;
use rg_graph::GraphError;
use rg_growth::GrowthError;
use rg_schedule::ScheduleError;
use thiserror::Error;

use crate::EngineState;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no field oracle supplied")]
    MissingOracle,

    #[error("road graph is not available before the run is done (engine is {0})")]
    NotFinished(EngineState),

    #[error("{op} is not valid while the engine is {state}")]
    InvalidState {
        op:    &'static str,
        state: EngineState,
    },

    #[error("growth configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("seeding failed: {0}")]
    Growth(#[from] GrowthError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type EngineResult<T> = Result<T, EngineError>;
