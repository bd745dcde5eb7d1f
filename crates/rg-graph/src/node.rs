//! Road nodes.

use rg_core::{EdgeId, NodeKind, Vec2};

/// A road node: an edge endpoint shared by every incident edge.
///
/// `kind` and `on_highway` are derived and only authoritative after
/// [`RoadGraph::finalize`][crate::RoadGraph::finalize].  Equality is by
/// approximate position.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos:        Vec2,
    pub kind:       Option<NodeKind>,
    pub on_highway: bool,
    /// Live incident edges, in attachment order.
    pub edges:      Vec<EdgeId>,
}

impl Node {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, kind: None, on_highway: false, edges: Vec::new() }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        self.pos.approx_eq(other.pos)
    }
}
