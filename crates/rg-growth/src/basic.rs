//! Basic growth: forward continuation only.

use rg_core::GrowthRng;
use rg_field::FieldContext;
use rg_graph::Edge;

use crate::rays::{Fan, probe};
use crate::rule::{BranchingRule, child};

/// Continues a road within ±`straight_angle` of its heading toward the
/// densest ray, and never branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BasicRule;

impl BranchingRule for BasicRule {
    fn branch_same_class_forward(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        let params = ctx.params(edge.class);
        let fan = Fan::new(edge.end(), edge.direction(), edge.class, ctx.config.ray_count)
            .span(-params.straight_angle, params.straight_angle);

        match probe(ctx, rng, &fan) {
            Some(hit) if hit.score > params.population_threshold => {
                vec![child(edge, hit.endpoint, edge.class, ctx)]
            }
            _ => Vec::new(),
        }
    }

    fn branch_sideways_street(&self, _edge: &Edge, _ctx: &FieldContext<'_>, _rng: &mut GrowthRng) -> Vec<Edge> {
        Vec::new()
    }
}
