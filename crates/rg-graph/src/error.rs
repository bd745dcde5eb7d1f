use rg_core::{EdgeId, Vec2};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge {0} does not exist or was split")]
    UnknownEdge(EdgeId),

    #[error("edge ({a:?}, {b:?}) is already in the graph as {existing}")]
    DuplicateEdge { a: Vec2, b: Vec2, existing: EdgeId },

    #[error("edge endpoints coincide at {0:?}")]
    DegenerateEdge(Vec2),

    #[error("split point {at:?} is an endpoint of {edge}")]
    SplitAtEndpoint { edge: EdgeId, at: Vec2 },
}

pub type GraphResult<T> = Result<T, GraphError>;
