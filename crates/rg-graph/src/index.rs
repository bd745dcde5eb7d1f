//! R-tree entries for the node and edge spatial indexes.

use rstar::{AABB, PointDistance, RTreeObject};

use rg_core::{EdgeId, NodeId, Vec2};

// ── Nodes ─────────────────────────────────────────────────────────────────────

/// A node position with its `NodeId`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NodeEntry {
    pub point: [f32; 2],
    pub id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Edges ─────────────────────────────────────────────────────────────────────

/// The bounding box of a committed edge.  Exact hit tests happen in the
/// caller; the tree only narrows the candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct EdgeEntry {
    pub lo: [f32; 2],
    pub hi: [f32; 2],
    pub id: EdgeId,
}

impl EdgeEntry {
    pub fn new(a: Vec2, b: Vec2, id: EdgeId) -> Self {
        Self {
            lo: [a.x.min(b.x), a.y.min(b.y)],
            hi: [a.x.max(b.x), a.y.max(b.y)],
            id,
        }
    }
}

impl RTreeObject for EdgeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.lo, self.hi)
    }
}
