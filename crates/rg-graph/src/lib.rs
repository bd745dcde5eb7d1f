//! `rg-graph` — the persistent road graph written by the growth engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`edge`]    | `Edge` (candidate and committed road segment)                |
//! | [`node`]    | `Node` (position, incident edges, derived kind)              |
//! | [`graph`]   | `RoadGraph` (commit, split, spatial queries, finalize)       |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                               |
//!
//! # Invariants maintained by `RoadGraph`
//!
//! - No two live edges join the same pair of nodes.
//! - No live edge has coincident endpoints.
//! - Splitting is atomic: the split edge disappears and both halves appear in
//!   one call, or the graph is unchanged.

pub mod edge;
pub mod error;
pub mod graph;
pub mod node;

mod index;

#[cfg(test)]
mod tests;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use graph::RoadGraph;
pub use node::Node;
