//! Plain data row types written by output backends.

use rg_core::{NodeKind, RoadClass};
use rg_graph::{Edge, RoadGraph};

/// One accepted candidate, in commit order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitRow {
    pub index:    u64,
    pub start_x:  f32,
    pub start_y:  f32,
    pub end_x:    f32,
    pub end_y:    f32,
    pub class:    RoadClass,
    pub priority: u32,
}

impl CommitRow {
    pub fn new(edge: &Edge, index: u64) -> Self {
        Self {
            index,
            start_x:  edge.start().x,
            start_y:  edge.start().y,
            end_x:    edge.end().x,
            end_y:    edge.end().y,
            class:    edge.class,
            priority: edge.priority.0,
        }
    }
}

/// A node of the finished graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRow {
    pub node_id:    u32,
    pub x:          f32,
    pub y:          f32,
    /// `None` only for a node left without edges.
    pub kind:       Option<NodeKind>,
    pub on_highway: bool,
    pub degree:     u32,
}

/// A live edge of the finished graph, by node IDs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRow {
    pub edge_id:    u32,
    pub start_node: u32,
    pub end_node:   u32,
    pub class:      RoadClass,
    pub length:     f32,
}

/// Node rows for every node in `graph`, by ascending ID.
pub fn node_rows(graph: &RoadGraph) -> Vec<NodeRow> {
    graph
        .nodes()
        .map(|(id, node)| NodeRow {
            node_id:    id.0,
            x:          node.pos.x,
            y:          node.pos.y,
            kind:       node.kind,
            on_highway: node.on_highway,
            degree:     node.degree() as u32,
        })
        .collect()
}

/// Edge rows for every live edge in `graph`, in commit order.
pub fn edge_rows(graph: &RoadGraph) -> Vec<EdgeRow> {
    graph
        .edges()
        .filter_map(|(id, edge)| {
            let [start, end] = graph.edge_nodes(id)?;
            Some(EdgeRow {
                edge_id:    id.0,
                start_node: start.0,
                end_node:   end.0,
                class:      edge.class,
                length:     edge.length(),
            })
        })
        .collect()
}
