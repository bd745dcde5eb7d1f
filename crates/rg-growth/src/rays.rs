//! Ray casting: how growth rules look at the population field.
//!
//! A rule asks "where is it worth going from here?" by casting a fan of rays
//! from a frontier endpoint and walking each one through the population
//! field:
//!
//! ```text
//! cast_rays   [min°, max°] split into ray_count sectors, one random ray each,
//!             length = look_ahead × min_length of the class
//! best_ray    walk ⌊√len⌋ evenly spaced samples per ray
//!               endpoint = first sample ≥ min_length from the origin
//!               score    = max population over the samples walked
//!               walk stops at the first out-of-bounds sample
//!             → highest score among rays that produced an endpoint
//! ```

use rg_core::{GrowthRng, RoadClass, Vec2};
use rg_field::FieldContext;

/// The chosen ray of a cast: where a new edge would end and how populated
/// the way there looked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub endpoint: Vec2,
    pub score:    f32,
}

/// Score of an optional hit; a missing hit loses every comparison.
#[inline]
pub fn score(hit: Option<RayHit>) -> f32 {
    hit.map_or(f32::NEG_INFINITY, |h| h.score)
}

// ── Fan ───────────────────────────────────────────────────────────────────────

/// A fan of rays to cast: `ray_count` rays from `origin` spread over the
/// angles `from..to` (degrees, relative to `reference`).
#[derive(Clone, Copy, Debug)]
pub struct Fan {
    pub origin:    Vec2,
    pub reference: Vec2,
    pub from:      f32,
    pub to:        f32,
    pub class:     RoadClass,
    pub ray_count: u32,
}

impl Fan {
    /// A single ray straight along `reference`.
    pub fn new(origin: Vec2, reference: Vec2, class: RoadClass, ray_count: u32) -> Self {
        Self { origin, reference, from: 0.0, to: 0.0, class, ray_count }
    }

    /// The same fan over a different angular span.
    pub fn span(self, from: f32, to: f32) -> Self {
        Self { from, to, ..self }
    }
}

// ── Casting ───────────────────────────────────────────────────────────────────

/// Cast one random ray per equal sector of the fan's span.
///
/// `from > to` is allowed; sectors then run clockwise.  Returns the far end
/// of each ray.
pub fn cast_rays(ctx: &FieldContext<'_>, rng: &mut GrowthRng, fan: &Fan) -> Vec<Vec2> {
    let dir = fan.reference.normalized();
    let length = ctx.params(fan.class).ray_length();
    let sectors = fan.ray_count.max(1);
    let step = (fan.to - fan.from) / sectors as f32;

    (0..sectors)
        .map(|i| {
            let lo = fan.from + step * i as f32;
            let angle = rng.between(lo, lo + step);
            fan.origin + dir.rotated(angle) * length
        })
        .collect()
}

/// Walk every candidate ray and return the best hit, or `None` if no ray
/// reached `min_length` while in bounds.
pub fn best_ray(ctx: &FieldContext<'_>, origin: Vec2, candidates: &[Vec2], class: RoadClass) -> Option<RayHit> {
    let min_length = ctx.params(class).min_length;
    let mut best: Option<RayHit> = None;

    for &target in candidates {
        let ray = target - origin;
        let length = ray.length();
        let samples = length.sqrt() as usize;
        if samples == 0 {
            continue;
        }
        let step = length / samples as f32;
        let dir = ray.normalized();

        let mut endpoint = None;
        let mut peak = f32::NEG_INFINITY;
        for i in 1..=samples {
            let travelled = step * i as f32;
            let p = origin + dir * travelled;
            if !ctx.field.is_in_bounds(p) {
                break;
            }
            peak = peak.max(ctx.field.population_at(p));
            if endpoint.is_none() && travelled >= min_length {
                endpoint = Some(p);
            }
        }

        if let Some(endpoint) = endpoint {
            if peak > score(best) {
                best = Some(RayHit { endpoint, score: peak });
            }
        }
    }
    best
}

/// [`cast_rays`] then [`best_ray`].
pub fn probe(ctx: &FieldContext<'_>, rng: &mut GrowthRng, fan: &Fan) -> Option<RayHit> {
    let rays = cast_rays(ctx, rng, fan);
    best_ray(ctx, fan.origin, &rays, fan.class)
}
