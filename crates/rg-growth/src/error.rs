use rg_core::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrowthError {
    #[error("no dry, in-bounds seed location found after {attempts} attempts")]
    NoSeedLocation { attempts: u32 },

    #[error("seed strategy needs population peaks but the field reports none")]
    NoDensityPeaks,

    #[error("field extent {0:?} is too small to place a seed")]
    FieldTooSmall(Vec2),
}

pub type GrowthResult<T> = Result<T, GrowthError>;
