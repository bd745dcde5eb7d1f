//! Global goals: where the network starts and what it proposes next.

use tracing::debug;

use rg_core::{GrowthRng, Priority, RoadClass, SeedStrategy, Vec2};
use rg_field::FieldContext;
use rg_graph::Edge;

use crate::rule::{BranchingRule, GrowthRule};
use crate::{GrowthError, GrowthResult};

/// Random seed points are drawn at least this far inside the field edge.
const SEED_INSET: f32 = 10.0;

/// Draws before [`SeedStrategy::RandomPoint`] gives up.
pub const MAX_SEED_ATTEMPTS: u32 = 1_000;

/// Seeding and follow-on candidate generation.
pub struct GlobalGoals;

impl GlobalGoals {
    /// Initial highway pairs for `strategy`.
    ///
    /// Each pair is two highway edges of highway `min_length` leaving the seed
    /// point in opposite directions along a random bearing.  All seeds have
    /// priority zero.
    pub fn generate_seed_roads(
        strategy: SeedStrategy,
        ctx:      &FieldContext<'_>,
        rng:      &mut GrowthRng,
    ) -> GrowthResult<Vec<Edge>> {
        let centers = match strategy {
            SeedStrategy::RandomPoint   => vec![random_dry_point(ctx, rng)?],
            SeedStrategy::EveryPeak     => peaks(ctx)?,
            SeedStrategy::RandomPeak    => {
                let all = peaks(ctx)?;
                rng.choose(&all).copied().into_iter().collect()
            }
            SeedStrategy::GlobalMaximum => vec![global_maximum(ctx)?],
        };

        let mut seeds = Vec::with_capacity(centers.len() * 2);
        for center in centers {
            let [a, b] = seed_pair(center, ctx, rng);
            debug!(x = center.x, y = center.y, ?strategy, "seed pair placed");
            seeds.push(a);
            seeds.push(b);
        }
        Ok(seeds)
    }

    /// Candidates growing out of a freshly committed `edge`.
    ///
    /// The rule is chosen by the growth style at the edge's far endpoint.
    /// Highways ask for forward and lateral highway branches, streets for
    /// forward streets; both then ask for sideways streets.
    pub fn generate_follow_on_roads(edge: &Edge, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> Vec<Edge> {
        let rule = GrowthRule::for_style(ctx.field.growth_style_at(edge.end()));

        let mut out = rule.branch_same_class_forward(edge, ctx, rng);
        if edge.class == RoadClass::Highway {
            out.extend(rule.branch_same_class_lateral(edge, ctx, rng));
        }
        out.extend(rule.branch_sideways_street(edge, ctx, rng));
        out
    }
}

// ── Seeding helpers ───────────────────────────────────────────────────────────

fn seed_pair(center: Vec2, ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> [Edge; 2] {
    let bearing = rng.between(0.0, 360.0);
    let reach = Vec2::new(1.0, 0.0).rotated(bearing) * ctx.params(RoadClass::Highway).min_length;
    [
        Edge::new(center, center + reach, RoadClass::Highway, Priority::ZERO),
        Edge::new(center, center - reach, RoadClass::Highway, Priority::ZERO),
    ]
}

fn random_dry_point(ctx: &FieldContext<'_>, rng: &mut GrowthRng) -> GrowthResult<Vec2> {
    let extent = ctx.field.extent();
    if extent.x <= 2.0 * SEED_INSET || extent.y <= 2.0 * SEED_INSET {
        return Err(GrowthError::FieldTooSmall(extent));
    }
    for _ in 0..MAX_SEED_ATTEMPTS {
        let p = Vec2::new(
            rng.between(SEED_INSET, extent.x - SEED_INSET),
            rng.between(SEED_INSET, extent.y - SEED_INSET),
        );
        if ctx.field.is_in_bounds(p) && !ctx.field.is_underwater(p) {
            return Ok(p);
        }
    }
    Err(GrowthError::NoSeedLocation { attempts: MAX_SEED_ATTEMPTS })
}

fn peaks(ctx: &FieldContext<'_>) -> GrowthResult<Vec<Vec2>> {
    let peaks = ctx.field.density_peaks();
    if peaks.is_empty() {
        return Err(GrowthError::NoDensityPeaks);
    }
    Ok(peaks)
}

/// Highest-population in-bounds point on the unit grid.  Ties keep the first
/// point in row-major scan order.
fn global_maximum(ctx: &FieldContext<'_>) -> GrowthResult<Vec2> {
    let extent = ctx.field.extent();
    let mut best: Option<(Vec2, f32)> = None;

    for y in 0..=extent.y as u32 {
        for x in 0..=extent.x as u32 {
            let p = Vec2::new(x as f32, y as f32);
            if !ctx.field.is_in_bounds(p) {
                continue;
            }
            let pop = ctx.field.population_at(p);
            if best.is_none_or(|(_, b)| pop > b) {
                best = Some((p, pop));
            }
        }
    }
    best.map(|(p, _)| p).ok_or(GrowthError::FieldTooSmall(extent))
}
