//! Intersection resolver: fit a candidate into the existing network.
//!
//! Stages, first match wins:
//!
//! ```text
//! 1. crossing   sweep the candidate (width of its class) against nearby
//!               edges; end it at the nearest crossing and plan a split
//! 2. snap       a node within min(len/2, node_check_radius) of the far end
//!               (not the candidate's own start) becomes the new end
//! 3. connect    stage 1 again with the sweep extended road_connect_distance
//!               past the far end
//! 4. unchanged  nothing nearby; the candidate stands as is
//! ```
//!
//! Resolution is pure.  A planned split is only carried out by
//! [`Resolution::apply`], after every other check has passed, so a rejected
//! candidate never changes the graph.

use tracing::trace;

use rg_core::geom::{
    angle_between, crossing_angle, line_intersection, project_param, segment_distance,
    segment_intersection,
};
use rg_core::{EdgeId, Vec2};
use rg_field::FieldContext;
use rg_graph::{Edge, GraphResult, RoadGraph};

use crate::Rejection;

/// Added to half the road width when testing whether an edge is hit.
const HIT_SLACK: f32 = 0.1;

/// Tolerance on the crossed edge's parameter when accepting an intersection.
const SEGMENT_TOLERANCE: f32 = 1e-4;

// ── Resolution ────────────────────────────────────────────────────────────────

/// Which stage produced a [`Resolution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Crossing,
    Snap,
    Connect,
    Unchanged,
}

/// An existing edge to split at `at` before the resolved edge is committed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannedSplit {
    pub edge: EdgeId,
    pub at:   Vec2,
}

/// A candidate fitted to the network.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub edge:  Edge,
    pub split: Option<PlannedSplit>,
    pub stage: Stage,
}

/// IDs produced by [`Resolution::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub edge:  EdgeId,
    /// The replaced edge and its two halves.
    pub split: Option<(EdgeId, [EdgeId; 2])>,
}

impl Resolution {
    /// Carry out the planned split, if any, then commit the resolved edge.
    pub fn apply(self, graph: &mut RoadGraph) -> GraphResult<Applied> {
        let split = match self.split {
            Some(plan) => Some((plan.edge, graph.split_edge(plan.edge, plan.at)?)),
            None       => None,
        };
        let edge = graph.commit(self.edge)?;
        Ok(Applied { edge, split })
    }
}

// ── IntersectionResolver ──────────────────────────────────────────────────────

pub struct IntersectionResolver;

impl IntersectionResolver {
    pub fn resolve(candidate: &Edge, graph: &RoadGraph, ctx: &FieldContext<'_>) -> Result<Resolution, Rejection> {
        if candidate.is_degenerate() {
            return Err(Rejection::Degenerate);
        }

        if let Some(res) = crossing(candidate, graph, ctx, 0.0, Stage::Crossing)? {
            return Ok(res);
        }

        let radius = (candidate.length() / 2.0).min(ctx.config.node_check_radius);
        let own_start = graph.node_at(candidate.start());
        if let Some(node) = graph.nearest_node_within(candidate.end(), radius, own_start) {
            let target = graph.node(node).map_or(candidate.end(), |n| n.pos);
            let snapped = candidate.with_end(target);
            check_junction(&snapped, graph, ctx)?;
            trace!(x = target.x, y = target.y, "candidate snapped to node");
            return Ok(Resolution { edge: snapped, split: None, stage: Stage::Snap });
        }

        let reach = ctx.config.road_connect_distance;
        if let Some(res) = crossing(candidate, graph, ctx, reach, Stage::Connect)? {
            return Ok(res);
        }

        Ok(Resolution { edge: candidate.clone(), split: None, stage: Stage::Unchanged })
    }
}

// ── Crossing search ───────────────────────────────────────────────────────────

/// Sweep `candidate`, extended by `extra` past its end, against nearby edges.
///
/// Edges touching the candidate's endpoints are junctions and only need a
/// wide enough angle.  Any other edge hit must cross at a wide enough angle
/// too; the crossing nearest the start wins.
fn crossing(
    candidate: &Edge,
    graph:     &RoadGraph,
    ctx:       &FieldContext<'_>,
    extra:     f32,
    stage:     Stage,
) -> Result<Option<Resolution>, Rejection> {
    let cfg = ctx.config;
    let start = candidate.start();
    let heading = candidate.direction();
    let sweep_end = candidate.end() + heading.normalized() * extra;
    let reach = HIT_SLACK + ctx.params(candidate.class).width / 2.0;

    let lo = Vec2::new(start.x.min(sweep_end.x) - reach, start.y.min(sweep_end.y) - reach);
    let hi = Vec2::new(start.x.max(sweep_end.x) + reach, start.y.max(sweep_end.y) + reach);

    let mut nearest: Option<(f32, EdgeId, Vec2)> = None;

    for id in graph.edges_near(lo, hi) {
        let Some(other) = graph.edge(id) else { continue };
        if segment_distance(start, sweep_end, other.start(), other.end()) > reach {
            continue;
        }
        if other == candidate {
            return Err(Rejection::Duplicate);
        }

        // Junction at the candidate's start.
        if other.has_endpoint(start) {
            if angle_between(heading, other.direction_from(start)) <= cfg.min_road_angle {
                return Err(Rejection::SharpAngle);
            }
            continue;
        }
        // Junction at the candidate's end.
        let end = candidate.end();
        if other.has_endpoint(end) {
            if angle_between(-heading, other.direction_from(end)) <= cfg.min_road_angle {
                return Err(Rejection::SharpAngle);
            }
            continue;
        }

        if crossing_angle(heading, other.direction()) <= cfg.min_road_angle {
            return Err(Rejection::SharpAngle);
        }
        let Some(p) = line_intersection(start, end, other.start(), other.end()) else { continue };
        let t_other = project_param(p, other.start(), other.end());
        if !(-SEGMENT_TOLERANCE..=1.0 + SEGMENT_TOLERANCE).contains(&t_other) {
            continue;
        }
        if project_param(p, start, end) <= 0.0 {
            continue;
        }
        let dist = start.distance(p);
        if nearest.is_none_or(|(d, _, _)| dist < d) {
            nearest = Some((dist, id, p));
        }
    }

    let Some((_, id, p)) = nearest else { return Ok(None) };
    let Some(other) = graph.edge(id) else { return Ok(None) };

    let min_piece = cfg.min_length_after_split;
    if p.distance(other.start()) < min_piece || p.distance(other.end()) < min_piece {
        return Err(Rejection::ShortSplit);
    }
    // Both halves must still respect the crossed edge's slope limit.
    let max_slope = ctx.params(other.class).max_slope;
    if ctx.slope(other.start(), p) > max_slope || ctx.slope(p, other.end()) > max_slope {
        return Err(Rejection::IllegalPlacement);
    }
    let edge = candidate.with_end(p);
    if edge.length() < ctx.params(edge.class).min_length - crate::LENGTH_TOLERANCE {
        return Err(Rejection::TooShort);
    }

    trace!(%id, x = p.x, y = p.y, ?stage, "candidate ends on crossing");
    Ok(Some(Resolution { edge, split: Some(PlannedSplit { edge: id, at: p }), stage }))
}

// ── Junction check ────────────────────────────────────────────────────────────

/// Checks for an edge whose far end was moved onto an existing node.
fn check_junction(edge: &Edge, graph: &RoadGraph, ctx: &FieldContext<'_>) -> Result<(), Rejection> {
    if edge.is_degenerate() {
        return Err(Rejection::Degenerate);
    }
    if graph.contains(edge) {
        return Err(Rejection::Duplicate);
    }

    let min_angle = ctx.config.min_road_angle;
    let heading = edge.direction();
    for (at, outgoing) in [(edge.start(), heading), (edge.end(), -heading)] {
        for &id in graph.edges_at(at) {
            let Some(other) = graph.edge(id) else { continue };
            if angle_between(outgoing, other.direction_from(at)) <= min_angle {
                return Err(Rejection::SharpAngle);
            }
        }
    }

    let lo = Vec2::new(edge.start().x.min(edge.end().x), edge.start().y.min(edge.end().y));
    let hi = Vec2::new(edge.start().x.max(edge.end().x), edge.start().y.max(edge.end().y));
    for id in graph.edges_near(lo, hi) {
        let Some(other) = graph.edge(id) else { continue };
        if other.has_endpoint(edge.start()) || other.has_endpoint(edge.end()) {
            continue;
        }
        if segment_intersection(edge.start(), edge.end(), other.start(), other.end()).is_some() {
            return Err(Rejection::SnapCrosses);
        }
    }
    Ok(())
}
