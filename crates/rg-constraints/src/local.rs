//! Local constraints: the single gate every candidate passes through.

use rg_core::GrowthRng;
use rg_field::FieldContext;
use rg_graph::{Edge, RoadGraph};

use crate::intersection::{IntersectionResolver, Resolution, Stage};
use crate::{LENGTH_TOLERANCE, PositionLegalizer, Rejection};

pub struct LocalConstraints;

impl LocalConstraints {
    /// Legalize, resolve against `graph`, then check length.
    ///
    /// When resolution moved the far endpoint, the new placement is checked
    /// again (bounds, water, slope).  The graph is not modified; commit the
    /// result with [`Resolution::apply`].
    pub fn validate(
        candidate: &Edge,
        graph:     &RoadGraph,
        ctx:       &FieldContext<'_>,
        rng:       &mut GrowthRng,
    ) -> Result<Resolution, Rejection> {
        let legal = PositionLegalizer::legalize(candidate, ctx, rng)?;
        let resolved = IntersectionResolver::resolve(&legal, graph, ctx)?;

        if resolved.edge.length() < ctx.params(resolved.edge.class).min_length - LENGTH_TOLERANCE {
            return Err(Rejection::TooShort);
        }
        if resolved.stage != Stage::Unchanged && !PositionLegalizer::is_legal(&resolved.edge, ctx) {
            return Err(Rejection::IllegalPlacement);
        }
        Ok(resolved)
    }
}
