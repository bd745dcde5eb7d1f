//! Road edges.

use rg_core::{Priority, RoadClass, Vec2};

/// A straight road segment between two positions.
///
/// Candidates and committed edges share this type.  A candidate only becomes
/// part of a graph through [`RoadGraph::commit`][crate::RoadGraph::commit],
/// which interns its endpoints as nodes.
///
/// Equality is approximate and unordered: `a→b` equals `b→a`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    start:        Vec2,
    end:          Vec2,
    pub class:    RoadClass,
    pub priority: Priority,
    /// Cached `end − start`.
    direction:    Vec2,
}

impl Edge {
    pub fn new(start: Vec2, end: Vec2, class: RoadClass, priority: Priority) -> Self {
        Self { start, end, class, priority, direction: end - start }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// The far endpoint, where follow-on growth starts.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction.length()
    }

    /// Same start, class, and priority with a new far endpoint.
    pub fn with_end(&self, end: Vec2) -> Edge {
        Edge::new(self.start, end, self.class, self.priority)
    }

    /// `true` if start and end coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start.approx_eq(self.end)
    }

    /// `true` if `p` is one of this edge's endpoints.
    pub fn has_endpoint(&self, p: Vec2) -> bool {
        self.start.approx_eq(p) || self.end.approx_eq(p)
    }

    /// Direction of this edge pointing away from endpoint `p`.
    ///
    /// `p` is expected to be an endpoint; if it is the end, the reversed
    /// direction is returned.
    pub fn direction_from(&self, p: Vec2) -> Vec2 {
        if self.end.approx_eq(p) { -self.direction } else { self.direction }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Edge) -> bool {
        (self.start.approx_eq(other.start) && self.end.approx_eq(other.end))
            || (self.start.approx_eq(other.end) && self.end.approx_eq(other.start))
    }
}
