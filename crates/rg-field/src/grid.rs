//! Raster-backed field oracle.
//!
//! A `GridField` covers a square of side `size` world units with three
//! `resolution × resolution` rasters (row-major, row 0 at `y = 0`):
//!
//! | Raster      | Cell value                                       |
//! |-------------|--------------------------------------------------|
//! | heights     | terrain height                                   |
//! | population  | density in `[0, 1]` (clamped on build)           |
//! | growth      | `GrowthStyle`                                    |
//!
//! Coarse height is the value of the cell containing the query; accurate
//! height bilinearly interpolates between cell centers.  A position is in
//! bounds when it lies at least `bounds_margin` inside every edge of the
//! square.

use rg_core::{GrowthStyle, Vec2};
use tracing::warn;

use crate::peaks::detect_peaks;
use crate::{FieldError, FieldOracle, FieldResult, OUTSIDE_HEIGHT, OUTSIDE_POPULATION};

/// Default inset of the placement bounds: half a highway plus one unit.
pub const DEFAULT_BOUNDS_MARGIN: f32 = 6.0;

// ── GridField ─────────────────────────────────────────────────────────────────

pub struct GridField {
    size:          f32,
    resolution:    usize,
    heights:       Vec<f32>,
    population:    Vec<f32>,
    growth:        Vec<GrowthStyle>,
    water_level:   Option<f32>,
    bounds_margin: f32,
    /// World-space peak centers, computed once on build.
    peaks:         Vec<Vec2>,
}

impl GridField {
    /// A field with uniform height, population, and growth style and no water.
    pub fn flat(
        size:       f32,
        resolution: usize,
        height:     f32,
        population: f32,
        style:      GrowthStyle,
    ) -> FieldResult<GridField> {
        GridFieldBuilder::new(size, resolution)
            .height_fn(|_| height)
            .population_fn(|_| population)
            .growth_fn(|_| style)
            .build()
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// World units per raster cell.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.size / self.resolution as f32
    }

    /// `true` if `p` lies on the field at all (bounds margin ignored).
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.is_finite() && (0.0..=self.size).contains(&p.x) && (0.0..=self.size).contains(&p.y)
    }

    /// Row-major raster index of the cell containing `p`.  Caller checks
    /// [`contains`][Self::contains] first.
    fn cell_index(&self, p: Vec2) -> usize {
        let max = self.resolution - 1;
        let i = ((p.x / self.cell_size()) as usize).min(max);
        let j = ((p.y / self.cell_size()) as usize).min(max);
        j * self.resolution + i
    }

    fn outside(&self, what: &'static str, p: Vec2) {
        warn!(x = p.x, y = p.y, size = self.size, "{what} queried outside the field");
    }

    fn bilinear(&self, p: Vec2) -> f32 {
        let max = (self.resolution - 1) as f32;
        let u = (p.x / self.cell_size() - 0.5).clamp(0.0, max);
        let v = (p.y / self.cell_size() - 0.5).clamp(0.0, max);

        let i0 = u.floor() as usize;
        let j0 = v.floor() as usize;
        let i1 = (i0 + 1).min(self.resolution - 1);
        let j1 = (j0 + 1).min(self.resolution - 1);
        let fx = u - i0 as f32;
        let fy = v - j0 as f32;

        let h = |i: usize, j: usize| self.heights[j * self.resolution + i];
        let bottom = h(i0, j0) * (1.0 - fx) + h(i1, j0) * fx;
        let top = h(i0, j1) * (1.0 - fx) + h(i1, j1) * fx;
        bottom * (1.0 - fy) + top * fy
    }
}

impl FieldOracle for GridField {
    fn height_at(&self, p: Vec2) -> f32 {
        if !self.contains(p) {
            self.outside("height", p);
            return OUTSIDE_HEIGHT;
        }
        self.heights[self.cell_index(p)]
    }

    fn accurate_height_at(&self, p: Vec2) -> f32 {
        if !self.contains(p) {
            self.outside("height", p);
            return OUTSIDE_HEIGHT;
        }
        self.bilinear(p)
    }

    fn population_at(&self, p: Vec2) -> f32 {
        if !self.contains(p) {
            self.outside("population", p);
            return OUTSIDE_POPULATION;
        }
        self.population[self.cell_index(p)]
    }

    fn growth_style_at(&self, p: Vec2) -> GrowthStyle {
        if !self.contains(p) {
            self.outside("growth style", p);
            return GrowthStyle::Basic;
        }
        self.growth[self.cell_index(p)]
    }

    fn is_underwater(&self, p: Vec2) -> bool {
        match self.water_level {
            Some(level) => self.height_at(p) < level,
            None        => false,
        }
    }

    fn is_in_bounds(&self, p: Vec2) -> bool {
        let lo = self.bounds_margin;
        let hi = self.size - self.bounds_margin;
        p.is_finite() && (lo..=hi).contains(&p.x) && (lo..=hi).contains(&p.y)
    }

    fn extent(&self) -> Vec2 {
        Vec2::new(self.size, self.size)
    }

    fn density_peaks(&self) -> Vec<Vec2> {
        self.peaks.clone()
    }
}

// ── GridFieldBuilder ──────────────────────────────────────────────────────────

/// Fluent builder for [`GridField`].
///
/// | Method                 | Default                          |
/// |------------------------|----------------------------------|
/// | `.heights(v)`          | all `0.0`                        |
/// | `.population(v)`       | all `0.0`                        |
/// | `.growth(v)`           | all `GrowthStyle::Basic`         |
/// | `.water_level(h)`      | no water                         |
/// | `.bounds_margin(m)`    | [`DEFAULT_BOUNDS_MARGIN`]        |
///
/// The `*_fn` variants sample a closure at every cell center (world
/// coordinates).
pub struct GridFieldBuilder {
    size:          f32,
    resolution:    usize,
    heights:       Option<Vec<f32>>,
    population:    Option<Vec<f32>>,
    growth:        Option<Vec<GrowthStyle>>,
    water_level:   Option<f32>,
    bounds_margin: f32,
}

impl GridFieldBuilder {
    pub fn new(size: f32, resolution: usize) -> Self {
        Self {
            size,
            resolution,
            heights:       None,
            population:    None,
            growth:        None,
            water_level:   None,
            bounds_margin: DEFAULT_BOUNDS_MARGIN,
        }
    }

    pub fn heights(mut self, heights: Vec<f32>) -> Self {
        self.heights = Some(heights);
        self
    }

    pub fn population(mut self, population: Vec<f32>) -> Self {
        self.population = Some(population);
        self
    }

    pub fn growth(mut self, growth: Vec<GrowthStyle>) -> Self {
        self.growth = Some(growth);
        self
    }

    pub fn height_fn(self, f: impl Fn(Vec2) -> f32) -> Self {
        let v = self.sample(f);
        self.heights(v)
    }

    pub fn population_fn(self, f: impl Fn(Vec2) -> f32) -> Self {
        let v = self.sample(f);
        self.population(v)
    }

    pub fn growth_fn(self, f: impl Fn(Vec2) -> GrowthStyle) -> Self {
        let v = self.sample(f);
        self.growth(v)
    }

    /// Cells with height below `level` are underwater.
    pub fn water_level(mut self, level: f32) -> Self {
        self.water_level = Some(level);
        self
    }

    pub fn bounds_margin(mut self, margin: f32) -> Self {
        self.bounds_margin = margin;
        self
    }

    /// Validate raster dimensions, clamp population, and detect peaks.
    pub fn build(self) -> FieldResult<GridField> {
        if self.resolution < 2 {
            return Err(FieldError::Resolution(self.resolution));
        }
        if !(self.size > 0.0 && self.size.is_finite()) {
            return Err(FieldError::Size(self.size));
        }
        let cells = self.resolution * self.resolution;

        let heights = check_len(self.heights.unwrap_or_else(|| vec![0.0; cells]), cells, "height")?;
        let mut population =
            check_len(self.population.unwrap_or_else(|| vec![0.0; cells]), cells, "population")?;
        let growth = check_len(
            self.growth.unwrap_or_else(|| vec![GrowthStyle::Basic; cells]),
            cells,
            "growth style",
        )?;

        for v in &mut population {
            *v = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        }

        let cell_size = self.size / self.resolution as f32;
        let peaks = detect_peaks(&population, self.resolution)
            .into_iter()
            .map(|[i, j]| Vec2::new(i * cell_size, j * cell_size))
            .collect();

        Ok(GridField {
            size: self.size,
            resolution: self.resolution,
            heights,
            population,
            growth,
            water_level: self.water_level,
            bounds_margin: self.bounds_margin,
            peaks,
        })
    }

    fn sample<T>(&self, f: impl Fn(Vec2) -> T) -> Vec<T> {
        let cell = self.size / self.resolution.max(1) as f32;
        let mut out = Vec::with_capacity(self.resolution * self.resolution);
        for j in 0..self.resolution {
            for i in 0..self.resolution {
                out.push(f(Vec2::new((i as f32 + 0.5) * cell, (j as f32 + 0.5) * cell)));
            }
        }
        out
    }
}

fn check_len<T>(v: Vec<T>, expected: usize, what: &'static str) -> FieldResult<Vec<T>> {
    if v.len() != expected {
        return Err(FieldError::DimensionMismatch { expected, got: v.len(), what });
    }
    Ok(v)
}
