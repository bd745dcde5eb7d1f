//! `FieldContext` — the read-only view handed to growth rules and constraints.

use rg_core::{ClassParams, GrowthConfig, HeightPrecision, RoadClass, Vec2};

use crate::FieldOracle;

/// Oracle plus configuration, borrowed for the duration of one engine step.
#[derive(Clone, Copy)]
pub struct FieldContext<'a> {
    pub field:  &'a dyn FieldOracle,
    pub config: &'a GrowthConfig,
}

impl<'a> FieldContext<'a> {
    pub fn new(field: &'a dyn FieldOracle, config: &'a GrowthConfig) -> Self {
        Self { field, config }
    }

    #[inline]
    pub fn params(&self, class: RoadClass) -> &'a ClassParams {
        self.config.class(class)
    }

    /// Height at `p` using the configured precision.
    pub fn height(&self, p: Vec2) -> f32 {
        match self.config.height_precision {
            HeightPrecision::Coarse   => self.field.height_at(p),
            HeightPrecision::Accurate => self.field.accurate_height_at(p),
        }
    }

    /// |Δheight| over horizontal distance between `a` and `b`.
    ///
    /// Coincident points have infinite slope so they can never pass a slope
    /// test.
    pub fn slope(&self, a: Vec2, b: Vec2) -> f32 {
        let run = a.distance(b);
        if run <= f32::EPSILON {
            return f32::INFINITY;
        }
        (self.height(b) - self.height(a)).abs() / run
    }
}
