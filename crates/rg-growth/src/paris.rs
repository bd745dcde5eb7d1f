//! Radial growth: boulevards that bend toward and ring around population
//! peaks.
//!
//! From every frontier the rule surveys five zones relative to the heading
//! (`b` = class branch angle, `s` = straight angle, `c` = curve angle,
//! `W` = wide sweep):
//!
//! | Zone          | Span                      |
//! |---------------|---------------------------|
//! | ahead         | `-s .. s`                 |
//! | left branch   | `b .. b-c`                |
//! | right branch  | `-b .. -(b-c)`            |
//! | left check    | `b+W .. b-W`              |
//! | right check   | `-(b+W) .. -(b-W)`        |
//!
//! If the peak lies ahead the rule behaves like a grid, and the straight
//! child has to clear the street threshold whatever the class.  Otherwise it
//! bends toward the denser side and, when that side's branch beats the bend,
//! sends a branch toward the center as well.  An outward branch on the far
//! side is offered either way.

use rg_core::{GrowthRng, RoadClass};
use rg_field::FieldContext;
use rg_graph::Edge;

use crate::rays::{Fan, RayHit, probe, score};
use crate::rule::{BranchingRule, child, street_branch_probability};

/// Half-width of the side check zones around the branch angle, in degrees.
const WIDE_SWEEP: f32 = 75.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParisRule;

impl BranchingRule for ParisRule {
    fn branch_same_class_forward(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        match edge.class {
            RoadClass::Highway => {
                if ctx.field.population_at(edge.end()) >= ctx.config.paris_no_access_threshold {
                    return Vec::new();
                }
                radial(edge, RoadClass::Highway, ctx, rng)
            }
            // Street continuation comes from the sideways survey.
            RoadClass::Street => Vec::new(),
        }
    }

    fn branch_sideways_street(&self, edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        radial(edge, RoadClass::Street, ctx, rng)
    }
}

/// Survey the five zones around `edge`'s heading and grow `class` children.
fn radial(edge: &Edge, class: RoadClass, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
    let params = ctx.params(class);
    let threshold = params.population_threshold;
    let (b, s, c) = (params.branch_angle, params.straight_angle, ctx.config.paris_curve_angle);

    let lateral_chance = match class {
        RoadClass::Highway => params.branch_probability,
        RoadClass::Street  => street_branch_probability(ctx.field.population_at(edge.end())),
    };

    let base = Fan::new(edge.end(), edge.direction(), class, ctx.config.ray_count);
    let ahead = probe(ctx, rng, &base.span(-s, s));
    let left = probe(ctx, rng, &base.span(b, b - c));
    let right = probe(ctx, rng, &base.span(-b, -(b - c)));
    let left_check = probe(ctx, rng, &base.span(b + WIDE_SWEEP, b - WIDE_SWEEP));
    let right_check = probe(ctx, rng, &base.span(-(b + WIDE_SWEEP), -(b - WIDE_SWEEP)));

    let mut out = Vec::new();

    // ── Peak ahead: straight plus both laterals ───────────────────────────
    if score(ahead) > score(left_check) && score(ahead) > score(right_check) {
        gated(&mut out, edge, right, class, threshold, lateral_chance, ctx, rng);
        gated(&mut out, edge, left, class, threshold, lateral_chance, ctx, rng);
        let straight = ctx.params(RoadClass::Street).population_threshold;
        push_above(&mut out, edge, ahead, class, straight, ctx);
        return out;
    }

    // ── Peak to one side: bend toward it ──────────────────────────────────
    let (sign, near, far) = if score(left_check) > score(right_check) {
        (1.0, left, right)
    } else {
        (-1.0, right, left)
    };
    let curve = probe(ctx, rng, &base.span(sign * (c + s), sign * c));

    if score(near) > score(curve) {
        push_above(&mut out, edge, curve, class, threshold, ctx);
        match class {
            RoadClass::Highway => {
                // A street spoke toward the center, at the highway branch angle.
                let street = ctx.params(RoadClass::Street);
                let spoke_fan = Fan::new(edge.end(), edge.direction(), RoadClass::Street, ctx.config.ray_count)
                    .span(sign * b, sign * (b - c));
                let spoke = probe(ctx, rng, &spoke_fan);
                gated(
                    &mut out,
                    edge,
                    spoke,
                    RoadClass::Street,
                    street.population_threshold,
                    street.branch_probability,
                    ctx,
                    rng,
                );
            }
            RoadClass::Street => {
                gated(&mut out, edge, near, class, threshold, lateral_chance, ctx, rng);
            }
        }
    } else if class == RoadClass::Highway {
        push_above(&mut out, edge, ahead, class, threshold, ctx);
    }

    gated(&mut out, edge, far, class, threshold, lateral_chance, ctx, rng);
    out
}

/// Push a child if `hit` beats `threshold`.
fn push_above(
    out:       &mut Vec<Edge>,
    edge:      &Edge,
    hit:       Option<RayHit>,
    class:     RoadClass,
    threshold: f32,
    ctx:       &FieldContext<'_>,
) {
    if let Some(hit) = hit {
        if hit.score > threshold {
            out.push(child(edge, hit.endpoint, class, ctx));
        }
    }
}

/// Push a child if `hit` beats `threshold` and a `chance` draw succeeds.
/// The draw is only taken when the threshold passes.
#[allow(clippy::too_many_arguments)]
fn gated(
    out:       &mut Vec<Edge>,
    edge:      &Edge,
    hit:       Option<RayHit>,
    class:     RoadClass,
    threshold: f32,
    chance:    f64,
    ctx:       &FieldContext<'_>,
    rng:       &mut GrowthRng,
) {
    if let Some(hit) = hit {
        if hit.score > threshold && rng.gen_bool(chance) {
            out.push(child(edge, hit.endpoint, class, ctx));
        }
    }
}
