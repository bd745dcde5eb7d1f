//! Integration tests for rg-engine.

use rg_core::{EdgeId, GrowthConfig, GrowthStyle, SeedStrategy, Vec2};
use rg_field::{GridField, GridFieldBuilder};
use rg_graph::{Edge, RoadGraph};

use crate::{EngineBuilder, EngineError, EngineState, GrowthEngine, GrowthObserver, NoopObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const CENTER: Vec2 = Vec2 { x: 256.0, y: 256.0 };

fn bump(p: Vec2, peak: f32, sigma: f32) -> f32 {
    let d2 = (p - CENTER).dot(p - CENTER);
    peak * (-d2 / (2.0 * sigma * sigma)).exp()
}

/// Flat 512 field whose population never reaches a branching threshold.
fn quiet_field() -> GridField {
    GridFieldBuilder::new(512.0, 64)
        .population_fn(|p| bump(p, 0.3, 100.0))
        .build()
        .unwrap()
}

/// Gentle ramp with a dense centre and all three growth styles in bands.
fn busy_field() -> GridField {
    GridFieldBuilder::new(512.0, 64)
        .height_fn(|p| 0.1 * p.x)
        .population_fn(|p| bump(p, 1.0, 120.0))
        .growth_fn(|p| {
            if p.x < 170.0 {
                GrowthStyle::Basic
            } else if p.x < 340.0 {
                GrowthStyle::NewYork
            } else {
                GrowthStyle::Paris
            }
        })
        .build()
        .unwrap()
}

fn config(cap: Option<u64>) -> GrowthConfig {
    GrowthConfig {
        seed:           42,
        seed_strategy:  SeedStrategy::GlobalMaximum,
        max_iterations: cap,
        ..GrowthConfig::default()
    }
}

fn engine(field: GridField, cfg: GrowthConfig) -> GrowthEngine<GridField> {
    EngineBuilder::new(cfg).field(field).build().unwrap()
}

/// Records everything the engine reports.
#[derive(Default)]
struct Recorder {
    seeds:      usize,
    committed:  Vec<(Edge, u64)>,
    rejected:   usize,
    splits:     Vec<(EdgeId, [EdgeId; 2])>,
    finished:   Option<usize>,
    stop_after: Option<usize>,
}

impl GrowthObserver for Recorder {
    fn on_seeded(&mut self, seeds: &[Edge]) {
        self.seeds = seeds.len();
    }
    fn on_edge_committed(&mut self, edge: &Edge, index: u64) {
        self.committed.push((edge.clone(), index));
    }
    fn on_edge_rejected(&mut self, _candidate: &Edge, _reason: rg_constraints::Rejection) {
        self.rejected += 1;
    }
    fn on_edge_split(&mut self, replaced: EdgeId, halves: [EdgeId; 2]) {
        self.splits.push((replaced, halves));
    }
    fn should_stop(&mut self) -> bool {
        self.stop_after.is_some_and(|n| self.committed.len() >= n)
    }
    fn on_finished(&mut self, graph: &RoadGraph) {
        self.finished = Some(graph.edge_count());
    }
}

// ── EngineBuilder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn missing_field_is_fatal() {
        let built = EngineBuilder::<GridField>::new(GrowthConfig::default()).build();
        assert!(matches!(built, Err(EngineError::MissingOracle)));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = GrowthConfig { ray_count: 0, ..GrowthConfig::default() };
        let built = EngineBuilder::new(cfg).field(quiet_field()).build();
        assert!(matches!(built, Err(EngineError::Config(_))));
    }

    #[test]
    fn starts_in_seeding() {
        let e = engine(quiet_field(), config(None));
        assert_eq!(e.state(), EngineState::Seeding);
        assert_eq!(e.pending(), 0);
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn graph_unavailable_before_done() {
        let mut e = engine(quiet_field(), config(None));
        assert!(matches!(e.graph(), Err(EngineError::NotFinished(EngineState::Seeding))));
        e.seed(&mut NoopObserver).unwrap();
        assert!(matches!(e.graph(), Err(EngineError::NotFinished(EngineState::Growing))));
        e.run(&mut NoopObserver).unwrap();
        assert!(e.graph().is_ok());
    }

    #[test]
    fn step_before_seed_is_invalid() {
        let mut e = engine(quiet_field(), config(None));
        let err = e.step(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, EngineError::InvalidState { op: "step", state: EngineState::Seeding }));
    }

    #[test]
    fn stepping_walks_every_state() {
        let mut e = engine(quiet_field(), config(None));
        assert_eq!(e.seed(&mut NoopObserver).unwrap(), 2);
        assert_eq!(e.state(), EngineState::Growing);
        assert_eq!(e.pending(), 2);

        while e.step(&mut NoopObserver).unwrap() {}
        assert_eq!(e.state(), EngineState::Finalizing);

        e.finalize(&mut NoopObserver).unwrap();
        assert_eq!(e.state(), EngineState::Done);
        assert!(matches!(
            e.finalize(&mut NoopObserver),
            Err(EngineError::InvalidState { op: "finalize", .. })
        ));
    }

    #[test]
    fn run_is_idempotent_once_done() {
        let mut e = engine(quiet_field(), config(None));
        e.run(&mut NoopObserver).unwrap();
        let edges = e.graph().unwrap().edge_count();
        e.run(&mut NoopObserver).unwrap();
        assert_eq!(e.graph().unwrap().edge_count(), edges);
    }
}

// ── Growth ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod growth_tests {
    use super::*;
    use rg_core::NodeKind;

    #[test]
    fn low_population_commits_only_seeds() {
        let mut e = engine(quiet_field(), config(None));
        let mut rec = Recorder::default();
        e.run(&mut rec).unwrap();

        assert_eq!(rec.seeds, 2);
        assert_eq!(e.stats().popped, 2);
        assert_eq!(e.stats().accepted, 2);
        assert_eq!(e.stats().rejected, 0);

        let g = e.into_graph().unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.node_count(), 3);
        let kinds: Vec<_> = g.nodes().map(|(_, n)| n.kind).collect();
        assert_eq!(kinds.iter().filter(|k| **k == Some(NodeKind::RoadEnd)).count(), 2);
        assert_eq!(kinds.iter().filter(|k| **k == Some(NodeKind::Straight)).count(), 1);
        assert!(g.nodes().all(|(_, n)| n.on_highway));
    }

    #[test]
    fn same_seed_same_graph() {
        let edges = |seed: u64| {
            let cfg = GrowthConfig { seed, ..config(Some(1_500)) };
            let mut e = engine(busy_field(), cfg);
            e.run(&mut NoopObserver).unwrap();
            let g = e.into_graph().unwrap();
            g.edges().map(|(_, e)| (e.start(), e.end(), e.class)).collect::<Vec<_>>()
        };
        let a = edges(9);
        assert!(a.len() > 2);
        assert_eq!(a, edges(9));
    }

    #[test]
    fn commit_indices_are_sequential() {
        let mut e = engine(busy_field(), config(Some(800)));
        let mut rec = Recorder::default();
        e.run(&mut rec).unwrap();

        for (i, (_, index)) in rec.committed.iter().enumerate() {
            assert_eq!(*index, i as u64);
        }
        assert_eq!(rec.committed.len() as u64, e.stats().accepted);
        assert_eq!(rec.rejected as u64, e.stats().rejected);
        assert_eq!(rec.splits.len() as u64, e.stats().splits);
        assert_eq!(e.stats().accepted + e.stats().rejected, e.stats().popped);
        assert_eq!(e.stats().rejections.values().sum::<u64>(), e.stats().rejected);
        assert_eq!(rec.finished, Some(e.graph().unwrap().edge_count()));
    }

    #[test]
    fn iteration_cap_bounds_the_run() {
        let mut e = engine(busy_field(), config(Some(50)));
        e.run(&mut NoopObserver).unwrap();
        assert_eq!(e.state(), EngineState::Done);
        assert_eq!(e.stats().popped, 50);
        assert_eq!(e.pending(), 0);
    }

    #[test]
    fn observer_can_stop_growth() {
        let mut e = engine(busy_field(), config(None));
        let mut rec = Recorder { stop_after: Some(5), ..Recorder::default() };
        e.run(&mut rec).unwrap();
        assert_eq!(rec.committed.len(), 5);
        assert!(e.graph().unwrap().is_finalized());
    }
}

// ── Network invariants ────────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use std::collections::HashSet;

    use super::*;
    use rg_core::NodeKind;
    use rg_core::geom::{angle_between, segment_intersection};
    use rg_field::FieldContext;

    fn grown() -> (GrowthEngine<GridField>, Recorder) {
        let mut e = engine(busy_field(), config(Some(1_500)));
        let mut rec = Recorder::default();
        e.run(&mut rec).unwrap();
        (e, rec)
    }

    #[test]
    fn committed_candidates_meet_class_minimum() {
        let (e, rec) = grown();
        for (edge, _) in &rec.committed {
            let min = e.config().class(edge.class).min_length;
            assert!(edge.length() >= min - 1e-3, "{edge:?} shorter than {min}");
        }
    }

    #[test]
    fn every_edge_within_split_minimum_and_slope() {
        let (e, _) = grown();
        let cfg = e.config();
        let ctx = FieldContext::new(e.field(), cfg);
        for (_, edge) in e.graph().unwrap().edges() {
            assert!(edge.length() >= cfg.min_length_after_split - 1e-3);
            assert!(ctx.slope(edge.start(), edge.end()) <= cfg.class(edge.class).max_slope + 1e-4);
        }
    }

    #[test]
    fn no_duplicate_node_pairs() {
        let (e, _) = grown();
        let g = e.graph().unwrap();
        let mut seen = HashSet::new();
        for (id, _) in g.edges() {
            let [a, b] = g.edge_nodes(id).unwrap();
            assert_ne!(a, b);
            assert!(seen.insert((a.min(b), a.max(b))), "duplicate pair at edge {id}");
        }
    }

    #[test]
    fn junction_angles_respect_minimum() {
        let (e, _) = grown();
        let g = e.graph().unwrap();
        let min = e.config().min_road_angle;
        for (_, node) in g.nodes() {
            let dirs: Vec<Vec2> = node
                .edges
                .iter()
                .filter_map(|&id| g.edge(id))
                .map(|edge| edge.direction_from(node.pos))
                .collect();
            for i in 0..dirs.len() {
                for j in i + 1..dirs.len() {
                    assert!(angle_between(dirs[i], dirs[j]) > min - 1e-2, "sharp junction at {:?}", node.pos);
                }
            }
        }
    }

    #[test]
    fn edges_without_shared_node_never_cross() {
        let (e, _) = grown();
        let g = e.graph().unwrap();
        let edges: Vec<_> = g.edges().map(|(id, edge)| (id, edge, g.edge_nodes(id).unwrap())).collect();
        assert!(edges.len() > 10);
        for (i, (a, ea, na)) in edges.iter().enumerate() {
            for (b, eb, nb) in &edges[i + 1..] {
                if na.iter().any(|n| nb.contains(n)) {
                    continue;
                }
                let hit = segment_intersection(ea.start(), ea.end(), eb.start(), eb.end());
                assert!(hit.is_none(), "edges {a} and {b} cross at {hit:?}");
            }
        }
    }

    #[test]
    fn nodes_classified_by_degree() {
        let (e, _) = grown();
        let g = e.graph().unwrap();
        for (_, node) in g.nodes() {
            assert_eq!(node.kind, NodeKind::from_degree(node.degree()));
            let expected = match node.degree() {
                0 => None,
                1 => Some(NodeKind::RoadEnd),
                2 => Some(NodeKind::Straight),
                _ => Some(NodeKind::Intersection),
            };
            assert_eq!(node.kind, expected);
        }
    }
}
