//! Position legalizer: make a candidate's far endpoint buildable or give up.

use rg_core::GrowthRng;
use rg_field::FieldContext;
use rg_graph::Edge;

use crate::Rejection;

/// Smallest and largest length factor tried during legalization.
const LENGTH_FACTOR: (f32, f32) = (0.6, 1.2);

pub struct PositionLegalizer;

impl PositionLegalizer {
    /// `true` if `edge`'s far endpoint is in bounds and dry, and the edge's
    /// slope is within its class limit.  Checked in that order.
    pub fn is_legal(edge: &Edge, ctx: &FieldContext<'_>) -> bool {
        let end = edge.end();
        ctx.field.is_in_bounds(end)
            && !ctx.field.is_underwater(end)
            && ctx.slope(edge.start(), end) <= ctx.params(edge.class).max_slope
    }

    /// Return `candidate` if legal, else try up to `legalization_attempts`
    /// perturbations of it.
    ///
    /// Every attempt starts from the original candidate: its direction is
    /// rotated by a uniform angle within ±`max_legalization_angle` and its
    /// length scaled by a uniform factor in `[0.6, 1.2]`.
    pub fn legalize(candidate: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Result<Edge, Rejection> {
        if candidate.is_degenerate() {
            return Err(Rejection::Degenerate);
        }
        if Self::is_legal(candidate, ctx) {
            return Ok(candidate.clone());
        }

        let attempts = ctx.config.legalization_attempts;
        let max_angle = ctx.config.max_legalization_angle;
        for _ in 0..attempts {
            let angle = rng.between(-max_angle, max_angle);
            let factor = rng.between(LENGTH_FACTOR.0, LENGTH_FACTOR.1);
            let end = candidate.start() + candidate.direction().rotated(angle) * factor;
            let attempt = candidate.with_end(end);
            if Self::is_legal(&attempt, ctx) {
                return Ok(attempt);
            }
        }
        Err(Rejection::PlacementExhausted { attempts })
    }
}
