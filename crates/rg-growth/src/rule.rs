//! The branching-rule interface and its closed set of implementations.

use std::f64::consts::E;

use rg_core::{GrowthRng, GrowthStyle, RoadClass, Vec2};
use rg_field::FieldContext;
use rg_graph::Edge;

use crate::{BasicRule, NewYorkRule, ParisRule};

/// Proposes child candidates growing out of a committed frontier edge.
///
/// Every method is pure with respect to the graph: it samples the field,
/// draws from `rng`, and returns candidates for the caller to schedule.
/// Children start at the frontier's far endpoint and carry priority
/// `parent + class weight` of their own class.
pub trait BranchingRule {
    /// Continue roughly straight with the frontier's own class.
    fn branch_same_class_forward(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge>;

    /// Same-class branches to either side.  Only asked of highways.
    fn branch_same_class_lateral(&self, _edge: &Edge, _ctx: &FieldContext<'_>, _rng: &mut GrowthRng) -> Vec<Edge> {
        Vec::new()
    }

    /// Street branches off the frontier, for any frontier class.
    fn branch_sideways_street(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge>;
}

// ── GrowthRule ────────────────────────────────────────────────────────────────

/// Rule selected by the growth style at a frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthRule {
    Basic(BasicRule),
    NewYork(NewYorkRule),
    Paris(ParisRule),
}

impl GrowthRule {
    pub fn for_style(style: GrowthStyle) -> GrowthRule {
        match style {
            GrowthStyle::Basic   => GrowthRule::Basic(BasicRule),
            GrowthStyle::NewYork => GrowthRule::NewYork(NewYorkRule),
            GrowthStyle::Paris   => GrowthRule::Paris(ParisRule),
        }
    }

    pub fn style(&self) -> GrowthStyle {
        match self {
            GrowthRule::Basic(_)   => GrowthStyle::Basic,
            GrowthRule::NewYork(_) => GrowthStyle::NewYork,
            GrowthRule::Paris(_)   => GrowthStyle::Paris,
        }
    }

    fn as_rule(&self) -> &dyn BranchingRule {
        match self {
            GrowthRule::Basic(r)   => r,
            GrowthRule::NewYork(r) => r,
            GrowthRule::Paris(r)   => r,
        }
    }
}

impl BranchingRule for GrowthRule {
    fn branch_same_class_forward(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        self.as_rule().branch_same_class_forward(edge, ctx, rng)
    }

    fn branch_same_class_lateral(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        self.as_rule().branch_same_class_lateral(edge, ctx, rng)
    }

    fn branch_sideways_street(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        self.as_rule().branch_sideways_street(edge, ctx, rng)
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// A child of `parent` ending at `end`.
pub fn child(parent: &Edge, end: Vec2, class: RoadClass, ctx: &FieldContext<'_>) -> Edge {
    Edge::new(parent.end(), end, class, parent.priority + ctx.params(class).priority_weight)
}

/// Probability of a sideways street at population `pop`:
/// `(eᵖᵒᵖ − 1) / (e − 1)`, 0 when empty and 1 when saturated.
pub fn street_branch_probability(pop: f32) -> f64 {
    let pop = pop.clamp(0.0, 1.0) as f64;
    (pop.exp() - 1.0) / (E - 1.0)
}
