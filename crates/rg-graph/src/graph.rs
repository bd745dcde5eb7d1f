//! `RoadGraph` — the committed road network.
//!
//! # Storage
//!
//! Edges live in a `Vec<Edge>` indexed by `EdgeId`.  Splitting an edge marks
//! its slot dead and appends the two halves, so IDs stay stable for the whole
//! run.  `order` lists live edges in commit order; a split replaces the dead
//! edge's entry in place with its two halves.
//!
//! # Indexes
//!
//! | Index        | Type                                   | Used for                     |
//! |--------------|----------------------------------------|------------------------------|
//! | `node_index` | `RTree<NodeEntry>`                     | endpoint interning, snapping |
//! | `edge_index` | `RTree<EdgeEntry>` (bounding boxes)    | crossing search              |
//! | `pairs`      | `FxHashMap<(NodeId, NodeId), EdgeId>`  | duplicate detection          |
//!
//! Node incident lists are maintained on every mutation so that constraint
//! checks can read them mid-run.  Node kinds are only assigned by
//! [`RoadGraph::finalize`].

use rstar::{AABB, RTree};
use rustc_hash::FxHashMap;
use tracing::warn;

use rg_core::{EdgeId, NodeId, NodeKind, RoadClass, Vec2};

use crate::index::{EdgeEntry, NodeEntry};
use crate::{Edge, GraphError, GraphResult, Node};

#[derive(Default)]
pub struct RoadGraph {
    edges:      Vec<Edge>,
    edge_nodes: Vec<[NodeId; 2]>,
    alive:      Vec<bool>,
    order:      Vec<EdgeId>,
    nodes:      Vec<Node>,
    node_index: RTree<NodeEntry>,
    edge_index: RTree<EdgeEntry>,
    pairs:      FxHashMap<(NodeId, NodeId), EdgeId>,
    finalized:  bool,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Counts ────────────────────────────────────────────────────────────

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.order.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `true` once [`finalize`][Self::finalize] has run and no mutation has
    /// happened since.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// A live edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.is_alive(id).then(|| &self.edges[id.index()])
    }

    /// Live edges in commit order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.order.iter().map(move |&id| (id, &self.edges[id.index()]))
    }

    /// Endpoint nodes of a live edge, as `[start, end]`.
    pub fn edge_nodes(&self, id: EdgeId) -> Option<[NodeId; 2]> {
        self.is_alive(id).then(|| self.edge_nodes[id.index()])
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i as u32), n))
    }

    /// The node at `p`, if any (within `POSITION_EPSILON`).
    pub fn node_at(&self, p: Vec2) -> Option<NodeId> {
        self.node_index
            .nearest_neighbor(&p.to_array())
            .filter(|e| Vec2::from(e.point).approx_eq(p))
            .map(|e| e.id)
    }

    /// Live edges incident to the node at `p`.  Empty if there is no node.
    pub fn edges_at(&self, p: Vec2) -> &[EdgeId] {
        match self.node_at(p) {
            Some(id) => &self.nodes[id.index()].edges,
            None     => &[],
        }
    }

    /// The live edge joining `a` and `b` in either direction.
    pub fn find_edge(&self, a: Vec2, b: Vec2) -> Option<EdgeId> {
        let na = self.node_at(a)?;
        let nb = self.node_at(b)?;
        self.pairs.get(&pair_key(na, nb)).copied()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.find_edge(edge.start(), edge.end()).is_some()
    }

    /// Live edges whose bounding box intersects the box `[lo, hi]`, in
    /// ascending ID order.
    pub fn edges_near(&self, lo: Vec2, hi: Vec2) -> Vec<EdgeId> {
        let envelope = AABB::from_corners(lo.to_array(), hi.to_array());
        let mut ids: Vec<EdgeId> = self
            .edge_index
            .locate_in_envelope_intersecting(&envelope)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// The nearest node within `radius` of `p`, skipping `exclude`.
    pub fn nearest_node_within(&self, p: Vec2, radius: f32, exclude: Option<NodeId>) -> Option<NodeId> {
        let r2 = radius * radius;
        self.node_index
            .nearest_neighbor_iter_with_distance_2(&p.to_array())
            .take_while(|&(_, d2)| d2 <= r2)
            .map(|(e, _)| e.id)
            .find(|&id| Some(id) != exclude)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add `edge`, interning its endpoints as nodes.
    pub fn commit(&mut self, edge: Edge) -> GraphResult<EdgeId> {
        if edge.is_degenerate() {
            return Err(GraphError::DegenerateEdge(edge.start()));
        }
        if let Some(existing) = self.find_edge(edge.start(), edge.end()) {
            return Err(GraphError::DuplicateEdge { a: edge.start(), b: edge.end(), existing });
        }
        let id = self.insert_edge(edge);
        self.order.push(id);
        Ok(id)
    }

    /// Replace live edge `id` with two halves meeting at `at`.
    ///
    /// The halves keep the original class and priority and take its place in
    /// commit order.  Returns `[start → at, at → end]`.
    pub fn split_edge(&mut self, id: EdgeId, at: Vec2) -> GraphResult<[EdgeId; 2]> {
        let old = self.edge(id).cloned().ok_or(GraphError::UnknownEdge(id))?;
        if old.has_endpoint(at) {
            return Err(GraphError::SplitAtEndpoint { edge: id, at });
        }

        self.remove_edge(id);
        let first = self.insert_edge(Edge::new(old.start(), at, old.class, old.priority));
        let second = self.insert_edge(Edge::new(at, old.end(), old.class, old.priority));

        match self.order.iter().position(|&e| e == id) {
            Some(pos) => {
                self.order.splice(pos..=pos, [first, second]);
            }
            None => self.order.extend([first, second]),
        }
        Ok([first, second])
    }

    /// Rebuild node adjacency from the live edges and classify every node.
    ///
    /// Degree 1 → `RoadEnd`, 2 → `Straight`, more → `Intersection`.  A node
    /// touching any highway is marked `on_highway`.
    pub fn finalize(&mut self) {
        for node in &mut self.nodes {
            node.edges.clear();
            node.on_highway = false;
        }
        for &id in &self.order {
            let class = self.edges[id.index()].class;
            for n in self.edge_nodes[id.index()] {
                let node = &mut self.nodes[n.index()];
                node.edges.push(id);
                node.on_highway |= class == RoadClass::Highway;
            }
        }

        let mut isolated = 0usize;
        for node in &mut self.nodes {
            node.kind = NodeKind::from_degree(node.degree());
            if node.kind.is_none() {
                isolated += 1;
            }
        }
        if isolated > 0 {
            warn!(isolated, "road nodes without incident edges after finalization");
        }
        self.finalized = true;
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn is_alive(&self, id: EdgeId) -> bool {
        self.alive.get(id.index()).copied().unwrap_or(false)
    }

    fn intern_node(&mut self, p: Vec2) -> NodeId {
        if let Some(id) = self.node_at(p) {
            return id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(p));
        self.node_index.insert(NodeEntry { point: p.to_array(), id });
        id
    }

    /// Store `edge` in a fresh slot and index it.  Does not touch `order`.
    fn insert_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        let a = self.intern_node(edge.start());
        let b = self.intern_node(edge.end());

        self.nodes[a.index()].edges.push(id);
        self.nodes[b.index()].edges.push(id);
        self.edge_index.insert(EdgeEntry::new(edge.start(), edge.end(), id));
        self.pairs.insert(pair_key(a, b), id);

        self.edges.push(edge);
        self.edge_nodes.push([a, b]);
        self.alive.push(true);
        self.finalized = false;
        id
    }

    /// Unlink live edge `id` from every index.  Its slot stays, marked dead.
    fn remove_edge(&mut self, id: EdgeId) {
        let edge = &self.edges[id.index()];
        let entry = EdgeEntry::new(edge.start(), edge.end(), id);
        let [a, b] = self.edge_nodes[id.index()];

        self.edge_index.remove(&entry);
        self.pairs.remove(&pair_key(a, b));
        for n in [a, b] {
            self.nodes[n.index()].edges.retain(|&e| e != id);
        }
        self.alive[id.index()] = false;
        self.finalized = false;
    }
}

/// Order-independent key for an endpoint pair.
#[inline]
fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}
