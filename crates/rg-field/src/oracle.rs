//! The `FieldOracle` trait.

use rg_core::{GrowthStyle, Vec2};

/// Read-only spatial queries over terrain, population, and growth style.
///
/// Implementations must be deterministic: the same position always yields
/// the same answer during a run.  The trait is object safe; growth code holds
/// it as `&dyn FieldOracle`.
pub trait FieldOracle {
    /// Coarse terrain height at `p`.
    fn height_at(&self, p: Vec2) -> f32;

    /// Interpolated terrain height at `p`.  Defaults to [`height_at`][Self::height_at].
    fn accurate_height_at(&self, p: Vec2) -> f32 {
        self.height_at(p)
    }

    /// Population density at `p`, in `[0, 1]`.
    fn population_at(&self, p: Vec2) -> f32;

    /// Growth style governing branching at `p`.
    fn growth_style_at(&self, p: Vec2) -> GrowthStyle;

    fn is_underwater(&self, p: Vec2) -> bool;

    /// `true` if a road node may be placed at `p`.
    fn is_in_bounds(&self, p: Vec2) -> bool;

    /// World size of the field.  Positions range over `[0, extent.x] × [0, extent.y]`.
    fn extent(&self) -> Vec2;

    /// Centers of detected population peaks, in world coordinates.
    ///
    /// Oracles without peak detection return an empty list, which makes the
    /// peak-based seed strategies fail with a growth error.
    fn density_peaks(&self) -> Vec<Vec2> {
        Vec::new()
    }
}
