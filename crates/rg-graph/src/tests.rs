//! Unit tests for rg-graph.

use rg_core::{Priority, RoadClass, Vec2};

use crate::{Edge, RoadGraph};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn street(a: Vec2, b: Vec2) -> Edge {
    Edge::new(a, b, RoadClass::Street, Priority(3))
}

fn highway(a: Vec2, b: Vec2) -> Edge {
    Edge::new(a, b, RoadClass::Highway, Priority(1))
}

// ── Edge ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edge {
    use super::*;

    #[test]
    fn equality_is_unordered() {
        assert_eq!(street(v(0.0, 0.0), v(10.0, 0.0)), street(v(10.0, 0.0), v(0.0, 0.0)));
        assert_ne!(street(v(0.0, 0.0), v(10.0, 0.0)), street(v(0.0, 0.0), v(10.0, 1.0)));
    }

    #[test]
    fn direction_is_cached_and_updated() {
        let e = street(v(0.0, 0.0), v(3.0, 4.0));
        assert_eq!(e.direction(), v(3.0, 4.0));
        assert_eq!(e.length(), 5.0);
        let f = e.with_end(v(0.0, 2.0));
        assert_eq!(f.direction(), v(0.0, 2.0));
        assert_eq!(f.priority, Priority(3));
    }

    #[test]
    fn direction_from_endpoint() {
        let e = street(v(0.0, 0.0), v(10.0, 0.0));
        assert_eq!(e.direction_from(v(10.0, 0.0)), v(-10.0, 0.0));
        assert_eq!(e.direction_from(v(0.0, 0.0)), v(10.0, 0.0));
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use super::*;
    use crate::GraphError;
    use rg_core::NodeKind;

    #[test]
    fn commit_interns_shared_endpoints() {
        let mut g = RoadGraph::new();
        g.commit(street(v(0.0, 0.0), v(50.0, 0.0))).unwrap();
        g.commit(street(v(50.0, 0.0), v(50.0, 50.0))).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edges_at(v(50.0, 0.0)).len(), 2);
    }

    #[test]
    fn duplicate_rejected_in_either_direction() {
        let mut g = RoadGraph::new();
        g.commit(street(v(0.0, 0.0), v(50.0, 0.0))).unwrap();
        let err = g.commit(street(v(50.0, 0.0), v(0.0, 0.0))).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn degenerate_rejected() {
        let mut g = RoadGraph::new();
        assert!(matches!(
            g.commit(street(v(1.0, 1.0), v(1.0, 1.0))),
            Err(GraphError::DegenerateEdge(_))
        ));
    }

    #[test]
    fn split_replaces_edge_in_place() {
        let mut g = RoadGraph::new();
        let a = g.commit(highway(v(0.0, 0.0), v(100.0, 0.0))).unwrap();
        let b = g.commit(street(v(0.0, 10.0), v(0.0, 60.0))).unwrap();

        let [h1, h2] = g.split_edge(a, v(50.0, 0.0)).unwrap();
        assert!(g.edge(a).is_none());
        assert_eq!(g.edge_count(), 3);

        let order: Vec<_> = g.edges().map(|(id, _)| id).collect();
        assert_eq!(order, vec![h1, h2, b]);

        let first = g.edge(h1).unwrap();
        assert_eq!(first.start(), v(0.0, 0.0));
        assert_eq!(first.end(), v(50.0, 0.0));
        assert_eq!(first.class, RoadClass::Highway);
        assert_eq!(first.priority, Priority(1));
        assert_eq!(g.edge(h2).unwrap().end(), v(100.0, 0.0));

        assert!(g.find_edge(v(0.0, 0.0), v(100.0, 0.0)).is_none());
        assert_eq!(g.find_edge(v(50.0, 0.0), v(0.0, 0.0)), Some(h1));
    }

    #[test]
    fn split_unknown_or_at_endpoint_fails() {
        let mut g = RoadGraph::new();
        let a = g.commit(street(v(0.0, 0.0), v(100.0, 0.0))).unwrap();
        assert!(matches!(g.split_edge(a, v(0.0, 0.0)), Err(GraphError::SplitAtEndpoint { .. })));
        g.split_edge(a, v(40.0, 0.0)).unwrap();
        assert!(matches!(g.split_edge(a, v(20.0, 0.0)), Err(GraphError::UnknownEdge(_))));
    }

    #[test]
    fn spatial_queries() {
        let mut g = RoadGraph::new();
        let far = g.commit(street(v(500.0, 500.0), v(600.0, 500.0))).unwrap();
        let near = g.commit(street(v(0.0, 0.0), v(100.0, 0.0))).unwrap();

        assert_eq!(g.edges_near(v(40.0, -5.0), v(60.0, 5.0)), vec![near]);
        assert_eq!(g.edges_near(v(0.0, -5.0), v(700.0, 700.0)), vec![far, near]);

        let origin = g.node_at(v(0.0, 0.0)).unwrap();
        assert_eq!(g.nearest_node_within(v(5.0, 0.0), 10.0, None), Some(origin));
        assert_eq!(g.nearest_node_within(v(5.0, 0.0), 10.0, Some(origin)), None);
        assert_eq!(g.nearest_node_within(v(5.0, 0.0), 2.0, None), None);
    }

    #[test]
    fn finalize_classifies_by_degree() {
        // A T-junction: (0,0)-(50,0)-(100,0) with a highway branch up from (50,0).
        let mut g = RoadGraph::new();
        g.commit(street(v(0.0, 0.0), v(50.0, 0.0))).unwrap();
        g.commit(street(v(50.0, 0.0), v(100.0, 0.0))).unwrap();
        g.commit(highway(v(50.0, 0.0), v(50.0, 100.0))).unwrap();
        g.commit(street(v(100.0, 0.0), v(150.0, 10.0))).unwrap();
        g.finalize();
        assert!(g.is_finalized());

        let kind = |p| g.node(g.node_at(p).unwrap()).unwrap().kind;
        let on_hw = |p| g.node(g.node_at(p).unwrap()).unwrap().on_highway;
        assert_eq!(kind(v(0.0, 0.0)), Some(NodeKind::RoadEnd));
        assert_eq!(kind(v(100.0, 0.0)), Some(NodeKind::Straight));
        assert_eq!(kind(v(50.0, 0.0)), Some(NodeKind::Intersection));
        assert!(on_hw(v(50.0, 100.0)));
        assert!(!on_hw(v(0.0, 0.0)));
    }

    #[test]
    fn mutation_clears_finalized() {
        let mut g = RoadGraph::new();
        g.commit(street(v(0.0, 0.0), v(50.0, 0.0))).unwrap();
        g.finalize();
        g.commit(street(v(50.0, 0.0), v(50.0, 50.0))).unwrap();
        assert!(!g.is_finalized());
    }
}
