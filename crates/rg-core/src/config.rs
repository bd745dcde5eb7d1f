//! Growth configuration.
//!
//! `GrowthConfig::default()` reproduces the stock parameter set: a
//! 1024-unit terrain with 100-unit highways and 30-unit streets.  Applications
//! typically load overrides from JSON (with the `serde` feature) and call
//! [`GrowthConfig::validate`] before building an engine.

use crate::{CoreError, CoreResult, RoadClass};

// ── ClassParams ───────────────────────────────────────────────────────────────

/// Parameters of one road class.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassParams {
    /// Road width in world units.  Used as the collision width when
    /// searching for crossings.
    pub width: f32,

    /// Added to the parent priority when scheduling a child of this class.
    pub priority_weight: u32,

    /// Minimum committed edge length.  Also the nominal length of new edges.
    pub min_length: f32,

    /// Rays are cast `look_ahead × min_length` ahead.  Must be ≥ 1.
    pub look_ahead: f32,

    /// A ray must score above this population to produce a child edge.
    pub population_threshold: f32,

    /// Probability gate for lateral branches of this class.
    pub branch_probability: f64,

    /// Lateral branch angle in degrees.
    pub branch_angle: f32,

    /// Half-width of the forward search cone in degrees.
    pub straight_angle: f32,

    /// Maximum |Δheight| / length of a committed edge.
    pub max_slope: f32,
}

impl ClassParams {
    /// Stock street parameters.
    pub fn street() -> Self {
        Self {
            width:                5.0,
            priority_weight:      3,
            min_length:           30.0,
            look_ahead:           2.0,
            population_threshold: 0.5,
            branch_probability:   0.5,
            branch_angle:         90.0,
            straight_angle:       15.0,
            max_slope:            0.3,
        }
    }

    /// Stock highway parameters.
    pub fn highway() -> Self {
        Self {
            width:                10.0,
            priority_weight:      1,
            min_length:           100.0,
            look_ahead:           10.0,
            population_threshold: 0.4,
            branch_probability:   1.0 / 3.0,
            branch_angle:         45.0,
            straight_angle:       15.0,
            max_slope:            0.5,
        }
    }

    /// Length of a cast ray.
    #[inline]
    pub fn ray_length(&self) -> f32 {
        self.min_length * self.look_ahead
    }

    fn validate(&self, class: RoadClass) -> CoreResult<()> {
        positive(self.width, "width")?;
        positive(self.min_length, "min_length")?;
        if self.look_ahead < 1.0 {
            return Err(CoreError::Config(format!(
                "{class} look_ahead {} must be >= 1 so rays reach min_length",
                self.look_ahead
            )));
        }
        unit_interval(self.population_threshold as f64, "population_threshold")?;
        unit_interval(self.branch_probability, "branch_probability")?;
        if !(0.0..=180.0).contains(&self.branch_angle) {
            return Err(CoreError::OutOfRange {
                name:     "branch_angle",
                value:    self.branch_angle as f64,
                expected: "[0, 180]",
            });
        }
        if !(0.0..=90.0).contains(&self.straight_angle) {
            return Err(CoreError::OutOfRange {
                name:     "straight_angle",
                value:    self.straight_angle as f64,
                expected: "[0, 90]",
            });
        }
        if self.max_slope < 0.0 || !self.max_slope.is_finite() {
            return Err(CoreError::OutOfRange {
                name:     "max_slope",
                value:    self.max_slope as f64,
                expected: "[0, inf)",
            });
        }
        Ok(())
    }
}

// ── SeedStrategy / HeightPrecision ────────────────────────────────────────────

/// How the initial highway pairs are placed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeedStrategy {
    /// A uniformly random in-bounds, dry point.
    #[default]
    RandomPoint,
    /// One pair at every detected population peak.
    EveryPeak,
    /// One pair at a single randomly chosen peak.
    RandomPeak,
    /// One pair at the highest-population point of a full grid scan.
    GlobalMaximum,
}

/// Which oracle height the slope test reads.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightPrecision {
    /// Raster cell lookup.
    #[default]
    Coarse,
    /// Interpolated height.
    Accurate,
}

// ── GrowthConfig ──────────────────────────────────────────────────────────────

/// Complete configuration of one growth run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthConfig {
    pub street:  ClassParams,
    pub highway: ClassParams,

    /// Sectors per ray cast.
    pub ray_count: u32,

    /// Perturbation attempts before the legalizer gives up.
    pub legalization_attempts: u32,

    /// Largest rotation (degrees) the legalizer applies to a candidate.
    pub max_legalization_angle: f32,

    /// Edges meeting at a node or crossing must form an angle strictly
    /// greater than this (degrees).
    pub min_road_angle: f32,

    /// Upper bound on the proximity-snap radius.
    pub node_check_radius: f32,

    /// Extra distance past a candidate's end searched for a connection.
    pub road_connect_distance: f32,

    /// Both halves of a split edge must be at least this long.
    pub min_length_after_split: f32,

    /// Radial growth stops expanding highways out of frontiers whose
    /// population is at or above this value.
    pub paris_no_access_threshold: f32,

    /// Width (degrees) of the curve ray cast toward an off-axis peak.
    pub paris_curve_angle: f32,

    /// Master RNG seed.
    pub seed: u64,

    pub seed_strategy: SeedStrategy,

    pub height_precision: HeightPrecision,

    /// Stop growing after this many scheduler pops and finalize what was
    /// committed.  `None` runs until the scheduler is empty.
    pub max_iterations: Option<u64>,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            street:                    ClassParams::street(),
            highway:                   ClassParams::highway(),
            ray_count:                 10,
            legalization_attempts:     15,
            max_legalization_angle:    20.0,
            min_road_angle:            30.0,
            node_check_radius:         40.0,
            road_connect_distance:     25.0,
            min_length_after_split:    15.0,
            paris_no_access_threshold: 0.98,
            paris_curve_angle:         5.0,
            seed:                      0,
            seed_strategy:             SeedStrategy::RandomPoint,
            height_precision:          HeightPrecision::Coarse,
            max_iterations:            None,
        }
    }
}

impl GrowthConfig {
    /// Parameters for `class`.
    #[inline]
    pub fn class(&self, class: RoadClass) -> &ClassParams {
        match class {
            RoadClass::Street  => &self.street,
            RoadClass::Highway => &self.highway,
        }
    }

    /// Reject parameter sets the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        for class in RoadClass::ALL {
            self.class(class).validate(class)?;
        }
        if self.highway.priority_weight >= self.street.priority_weight {
            return Err(CoreError::Config(format!(
                "highway priority weight {} must be below street weight {}",
                self.highway.priority_weight, self.street.priority_weight
            )));
        }
        if self.ray_count == 0 {
            return Err(CoreError::Config("ray_count must be at least 1".into()));
        }
        if !(0.0..90.0).contains(&self.min_road_angle) {
            return Err(CoreError::OutOfRange {
                name:     "min_road_angle",
                value:    self.min_road_angle as f64,
                expected: "[0, 90)",
            });
        }
        if !(0.0..=180.0).contains(&self.max_legalization_angle) {
            return Err(CoreError::OutOfRange {
                name:     "max_legalization_angle",
                value:    self.max_legalization_angle as f64,
                expected: "[0, 180]",
            });
        }
        non_negative(self.node_check_radius, "node_check_radius")?;
        non_negative(self.road_connect_distance, "road_connect_distance")?;
        non_negative(self.min_length_after_split, "min_length_after_split")?;
        unit_interval(self.paris_no_access_threshold as f64, "paris_no_access_threshold")?;
        non_negative(self.paris_curve_angle, "paris_curve_angle")?;
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn positive(value: f32, name: &'static str) -> CoreResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::OutOfRange { name, value: value as f64, expected: "(0, inf)" })
    }
}

fn non_negative(value: f32, name: &'static str) -> CoreResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::OutOfRange { name, value: value as f64, expected: "[0, inf)" })
    }
}

fn unit_interval(value: f64, name: &'static str) -> CoreResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::OutOfRange { name, value, expected: "[0, 1]" })
    }
}
