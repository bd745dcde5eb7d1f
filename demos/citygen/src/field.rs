//! Synthetic terrain for the demo.
//!
//! A 1024 × 1024 field: rolling hills, one lake, three population centres and
//! growth-style bands (grid in the west, radial in the north-east, basic
//! elsewhere).

use rg_core::{GrowthStyle, Vec2};
use rg_field::{FieldResult, GridField, GridFieldBuilder};

pub const FIELD_SIZE: f32 = 1024.0;
const RESOLUTION: usize = 256;

const LAKE_CENTER: Vec2 = Vec2 { x: 760.0, y: 300.0 };
const LAKE_RADIUS: f32 = 90.0;
const WATER_LEVEL: f32 = 0.0;

/// (centre, peak population, spread)
const TOWNS: [(Vec2, f32, f32); 3] = [
    (Vec2 { x: 300.0, y: 350.0 }, 1.0, 140.0),
    (Vec2 { x: 560.0, y: 640.0 }, 0.9, 110.0),
    (Vec2 { x: 800.0, y: 820.0 }, 0.8, 90.0),
];

fn height(p: Vec2) -> f32 {
    if p.distance(LAKE_CENTER) < LAKE_RADIUS {
        return -5.0;
    }
    20.0 + 30.0 * (p.x / 170.0).sin() * (p.y / 130.0).cos()
}

fn population(p: Vec2) -> f32 {
    if p.distance(LAKE_CENTER) < LAKE_RADIUS {
        return 0.0;
    }
    let total: f32 = TOWNS
        .iter()
        .map(|&(c, peak, spread)| {
            let d2 = (p - c).dot(p - c);
            peak * (-d2 / (2.0 * spread * spread)).exp()
        })
        .sum();
    total.min(1.0)
}

fn growth(p: Vec2) -> GrowthStyle {
    if p.x < 400.0 {
        GrowthStyle::NewYork
    } else if p.y > 560.0 {
        GrowthStyle::Paris
    } else {
        GrowthStyle::Basic
    }
}

pub fn build_field() -> FieldResult<GridField> {
    GridFieldBuilder::new(FIELD_SIZE, RESOLUTION)
        .height_fn(height)
        .population_fn(population)
        .growth_fn(growth)
        .water_level(WATER_LEVEL)
        .build()
}
