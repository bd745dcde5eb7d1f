//! Unit tests for rg-constraints.

use std::cell::Cell;

use rg_core::{GrowthConfig, GrowthRng, GrowthStyle, Priority, RoadClass, Vec2};
use rg_field::{FieldContext, FieldOracle, GridField, GridFieldBuilder};
use rg_graph::{Edge, RoadGraph};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn street(a: Vec2, b: Vec2) -> Edge {
    Edge::new(a, b, RoadClass::Street, Priority(3))
}

/// Flat, dry 200 × 200 field whose bounds reach the border.
fn open_field() -> GridField {
    GridFieldBuilder::new(200.0, 8).bounds_margin(0.0).build().unwrap()
}

/// Graph holding the single street (0,0)–(100,0).
fn graph_with_a() -> RoadGraph {
    let mut g = RoadGraph::new();
    g.commit(street(v(0.0, 0.0), v(100.0, 0.0))).unwrap();
    g
}

/// An oracle that rejects every placement and counts the bounds checks.
struct Walled {
    checks: Cell<u32>,
}

impl FieldOracle for Walled {
    fn height_at(&self, _p: Vec2) -> f32 {
        0.0
    }
    fn population_at(&self, _p: Vec2) -> f32 {
        0.0
    }
    fn growth_style_at(&self, _p: Vec2) -> GrowthStyle {
        GrowthStyle::Basic
    }
    fn is_underwater(&self, _p: Vec2) -> bool {
        false
    }
    fn is_in_bounds(&self, _p: Vec2) -> bool {
        self.checks.set(self.checks.get() + 1);
        false
    }
    fn extent(&self) -> Vec2 {
        v(100.0, 100.0)
    }
}

// ── Legalizer ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod legalizer {
    use super::*;
    use crate::{PositionLegalizer, Rejection};
    use rg_core::geom::angle_between;

    #[test]
    fn legal_candidate_is_unchanged() {
        let field = open_field();
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        let c = street(v(50.0, 50.0), v(90.0, 50.0));
        let out = PositionLegalizer::legalize(&c, &ctx, &mut GrowthRng::new(1)).unwrap();
        assert_eq!(out.end(), c.end());
    }

    #[test]
    fn gives_up_after_exactly_the_attempt_bound() {
        let field = Walled { checks: Cell::new(0) };
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        let c = street(v(50.0, 50.0), v(90.0, 50.0));

        let err = PositionLegalizer::legalize(&c, &ctx, &mut GrowthRng::new(1)).unwrap_err();
        assert_eq!(err, Rejection::PlacementExhausted { attempts: 15 });
        // One check of the original, one per attempt.
        assert_eq!(field.checks.get(), 16);
    }

    #[test]
    fn zero_attempts_checks_only_the_original() {
        let field = Walled { checks: Cell::new(0) };
        let cfg = GrowthConfig { legalization_attempts: 0, ..GrowthConfig::default() };
        let ctx = FieldContext::new(&field, &cfg);
        let err = PositionLegalizer::legalize(&street(v(1.0, 1.0), v(40.0, 1.0)), &ctx, &mut GrowthRng::new(1)).unwrap_err();
        assert_eq!(err, Rejection::PlacementExhausted { attempts: 0 });
        assert_eq!(field.checks.get(), 1);
    }

    #[test]
    fn perturbs_away_from_water() {
        // 4-unit cells; everything at x >= 596 is a lake.
        let field = GridFieldBuilder::new(1024.0, 256)
            .height_fn(|p| if p.x >= 596.0 { -1.0 } else { 1.0 })
            .water_level(0.0)
            .build()
            .unwrap();
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        let c = street(v(500.0, 500.0), v(600.0, 500.0));

        let out = PositionLegalizer::legalize(&c, &ctx, &mut GrowthRng::new(7)).unwrap();
        assert_eq!(out.start(), c.start());
        assert!(out.end().x < 596.0);
        assert!(out.length() >= 60.0 - 1e-3 && out.length() <= 120.0 + 1e-3);
        assert!(angle_between(c.direction(), out.direction()) <= 20.0 + 1e-3);
    }

    #[test]
    fn steep_terrain_is_rejected() {
        let field = GridFieldBuilder::new(1024.0, 64).height_fn(|p| p.x).build().unwrap();
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        let c = Edge::new(v(300.0, 500.0), v(400.0, 500.0), RoadClass::Highway, Priority(1));
        let err = PositionLegalizer::legalize(&c, &ctx, &mut GrowthRng::new(2)).unwrap_err();
        assert!(matches!(err, Rejection::PlacementExhausted { .. }));
    }

    #[test]
    fn degenerate_is_rejected() {
        let field = open_field();
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        let err = PositionLegalizer::legalize(&street(v(5.0, 5.0), v(5.0, 5.0)), &ctx, &mut GrowthRng::new(1));
        assert_eq!(err, Err(Rejection::Degenerate));
    }
}

// ── Intersection resolver ─────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use super::*;
    use crate::{IntersectionResolver, PlannedSplit, Rejection, Stage};
    use rg_core::NodeKind;

    fn resolve(candidate: &Edge, graph: &RoadGraph) -> Result<crate::Resolution, Rejection> {
        let field = open_field();
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        IntersectionResolver::resolve(candidate, graph, &ctx)
    }

    #[test]
    fn crossing_ends_candidate_and_plans_split() {
        let g = graph_with_a();
        let a = g.find_edge(v(0.0, 0.0), v(100.0, 0.0)).unwrap();
        let res = resolve(&street(v(50.0, -50.0), v(50.0, 50.0)), &g).unwrap();

        assert_eq!(res.stage, Stage::Crossing);
        assert!(res.edge.end().approx_eq(v(50.0, 0.0)));
        assert_eq!(res.edge.start(), v(50.0, -50.0));
        let PlannedSplit { edge, at } = res.split.unwrap();
        assert_eq!(edge, a);
        assert!(at.approx_eq(v(50.0, 0.0)));
    }

    #[test]
    fn apply_splits_then_commits() {
        let mut g = graph_with_a();
        let res = resolve(&street(v(50.0, -50.0), v(50.0, 50.0)), &g).unwrap();
        let applied = res.apply(&mut g).unwrap();

        assert_eq!(g.edge_count(), 3);
        assert!(g.find_edge(v(0.0, 0.0), v(50.0, 0.0)).is_some());
        assert!(g.find_edge(v(50.0, 0.0), v(100.0, 0.0)).is_some());
        assert!(g.find_edge(v(0.0, 0.0), v(100.0, 0.0)).is_none());
        assert!(g.edge(applied.edge).unwrap().end().approx_eq(v(50.0, 0.0)));
        assert!(applied.split.is_some());

        g.finalize();
        let mid = g.node_at(v(50.0, 0.0)).unwrap();
        assert_eq!(g.node(mid).unwrap().kind, Some(NodeKind::Intersection));
    }

    #[test]
    fn exact_duplicate_rejected() {
        let g = graph_with_a();
        assert_eq!(resolve(&street(v(100.0, 0.0), v(0.0, 0.0)), &g), Err(Rejection::Duplicate));
    }

    #[test]
    fn shallow_branch_from_shared_start_rejected() {
        let g = graph_with_a();
        assert_eq!(resolve(&street(v(0.0, 0.0), v(60.0, 6.0)), &g), Err(Rejection::SharpAngle));
    }

    #[test]
    fn wide_branch_from_shared_start_accepted() {
        let g = graph_with_a();
        let res = resolve(&street(v(0.0, 0.0), v(0.0, 60.0)), &g).unwrap();
        assert_eq!(res.stage, Stage::Unchanged);
    }

    #[test]
    fn shallow_crossing_rejected() {
        let g = graph_with_a();
        assert_eq!(resolve(&street(v(20.0, -10.0), v(80.0, 10.0)), &g), Err(Rejection::SharpAngle));
    }

    #[test]
    fn crossing_near_node_rejected_as_short_split() {
        let g = graph_with_a();
        assert_eq!(resolve(&street(v(10.0, -50.0), v(10.0, 50.0)), &g), Err(Rejection::ShortSplit));
    }

    #[test]
    fn snaps_to_nearby_node() {
        let g = graph_with_a();
        let res = resolve(&street(v(105.0, 80.0), v(105.0, 5.0)), &g).unwrap();
        assert_eq!(res.stage, Stage::Snap);
        assert_eq!(res.edge.end(), v(100.0, 0.0));
        assert!(res.split.is_none());
    }

    #[test]
    fn snap_with_sharp_junction_rejected() {
        let g = graph_with_a();
        assert_eq!(resolve(&street(v(30.0, 10.0), v(95.0, 3.0)), &g), Err(Rejection::SharpAngle));
    }

    #[test]
    fn extended_search_connects() {
        let g = graph_with_a();
        let res = resolve(&street(v(50.0, 40.0), v(50.0, 10.0)), &g).unwrap();
        assert_eq!(res.stage, Stage::Connect);
        assert!(res.edge.end().approx_eq(v(50.0, 0.0)));
        assert!(res.split.is_some());
    }

    #[test]
    fn empty_graph_leaves_candidate() {
        let g = RoadGraph::new();
        let c = street(v(10.0, 10.0), v(60.0, 10.0));
        let res = resolve(&c, &g).unwrap();
        assert_eq!(res.stage, Stage::Unchanged);
        assert_eq!(res.edge, c);
    }
}

// ── Local constraints ─────────────────────────────────────────────────────────

#[cfg(test)]
mod local {
    use super::*;
    use crate::{LocalConstraints, Rejection, Stage};

    #[test]
    fn crossing_street_splits_existing_road() {
        let field = open_field();
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        let mut g = graph_with_a();

        let b = street(v(50.0, -50.0), v(50.0, 50.0));
        let res = LocalConstraints::validate(&b, &g, &ctx, &mut GrowthRng::new(1)).unwrap();
        assert_eq!(res.stage, Stage::Crossing);
        res.apply(&mut g).unwrap();

        let edges: Vec<Edge> = g.edges().map(|(_, e)| e.clone()).collect();
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&street(v(0.0, 0.0), v(50.0, 0.0))));
        assert!(edges.contains(&street(v(50.0, 0.0), v(100.0, 0.0))));
        assert!(edges.contains(&street(v(50.0, -50.0), v(50.0, 0.0))));
    }

    #[test]
    fn short_candidate_rejected() {
        let field = open_field();
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        let g = RoadGraph::new();
        let err = LocalConstraints::validate(&street(v(50.0, 50.0), v(70.0, 50.0)), &g, &ctx, &mut GrowthRng::new(1));
        assert_eq!(err, Err(Rejection::TooShort));
    }

    #[test]
    fn crossing_into_lake_rejected() {
        // The crossing point (50, 100) is underwater; the candidate's own end is not.
        let field = GridFieldBuilder::new(200.0, 200)
            .height_fn(|p| if (p.x - 50.0).abs() < 3.0 && (p.y - 100.0).abs() < 3.0 { -1.0 } else { 1.0 })
            .water_level(0.0)
            .bounds_margin(0.0)
            .build()
            .unwrap();
        let cfg = GrowthConfig::default();
        let ctx = FieldContext::new(&field, &cfg);
        let mut g = RoadGraph::new();
        g.commit(street(v(0.0, 100.0), v(100.0, 100.0))).unwrap();

        let err = LocalConstraints::validate(&street(v(50.0, 50.0), v(50.0, 150.0)), &g, &ctx, &mut GrowthRng::new(1));
        assert_eq!(err, Err(Rejection::IllegalPlacement));
        assert_eq!(g.edge_count(), 1);
    }
}
