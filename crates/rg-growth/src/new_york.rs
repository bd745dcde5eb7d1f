//! Grid growth: every branch at exactly 0° or ±90°.

use rg_core::{GrowthRng, RoadClass};
use rg_field::FieldContext;
use rg_graph::Edge;

use crate::rays::{Fan, probe};
use crate::rule::{BranchingRule, child, street_branch_probability};

/// Grid turns, in the order they are tried.
const TURNS: [f32; 2] = [-90.0, 90.0];

/// Rectilinear grid.  Each direction is a single ray, so the only randomness
/// is in the branch gates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewYorkRule;

impl BranchingRule for NewYorkRule {
    fn branch_same_class_forward(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        let params = ctx.params(edge.class);
        let fan = Fan::new(edge.end(), edge.direction(), edge.class, 1);
        match probe(ctx, rng, &fan) {
            Some(hit) if hit.score > params.population_threshold => {
                vec![child(edge, hit.endpoint, edge.class, ctx)]
            }
            _ => Vec::new(),
        }
    }

    fn branch_same_class_lateral(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        let params = ctx.params(RoadClass::Highway);
        let base = Fan::new(edge.end(), edge.direction(), RoadClass::Highway, 1);

        let mut out = Vec::new();
        for turn in TURNS {
            let Some(hit) = probe(ctx, rng, &base.span(turn, turn)) else { continue };
            if hit.score > params.population_threshold && rng.gen_bool(params.branch_probability) {
                out.push(child(edge, hit.endpoint, RoadClass::Highway, ctx));
            }
        }
        out
    }

    fn branch_sideways_street(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        let params = ctx.params(RoadClass::Street);
        let chance = street_branch_probability(ctx.field.population_at(edge.end()));
        let base = Fan::new(edge.end(), edge.direction(), RoadClass::Street, 1);

        let mut out = Vec::new();
        for turn in TURNS {
            let Some(hit) = probe(ctx, rng, &base.span(turn, turn)) else { continue };
            if hit.score > params.population_threshold && rng.gen_bool(chance) {
                out.push(child(edge, hit.endpoint, RoadClass::Street, ctx));
            }
        }
        out
    }
}
