//! Fluent builder for constructing a [`GrowthEngine`].

use rg_core::{GrowthConfig, GrowthRng};
use rg_field::FieldOracle;

use crate::{EngineError, EngineResult, GrowthEngine};

/// Fluent builder for [`GrowthEngine<F>`].
///
/// | Method       | Default                          |
/// |--------------|----------------------------------|
/// | `.field(f)`  | none; `build` fails without one  |
/// | `.rng(r)`    | `GrowthRng::new(config.seed)`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(config)
///     .field(field)
///     .rng(GrowthRng::new(7))
///     .build()?;
/// ```
pub struct EngineBuilder<F: FieldOracle> {
    config: GrowthConfig,
    field:  Option<F>,
    rng:    Option<GrowthRng>,
}

impl<F: FieldOracle> EngineBuilder<F> {
    pub fn new(config: GrowthConfig) -> Self {
        Self { config, field: None, rng: None }
    }

    /// Supply the field oracle queried for terrain, population and style.
    pub fn field(mut self, field: F) -> Self {
        self.field = Some(field);
        self
    }

    /// Supply the random stream.  If not called, one is seeded from
    /// `config.seed`.
    pub fn rng(mut self, rng: GrowthRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and return an engine in the `Seeding` state.
    pub fn build(self) -> EngineResult<GrowthEngine<F>> {
        let field = self.field.ok_or(EngineError::MissingOracle)?;
        self.config.validate()?;
        let rng = self.rng.unwrap_or_else(|| GrowthRng::new(self.config.seed));
        Ok(GrowthEngine::new(self.config, field, rng))
    }
}
