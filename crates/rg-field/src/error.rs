use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("{what} raster has {got} cells, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("raster resolution {0} is too small (need at least 2)")]
    Resolution(usize),

    #[error("field size {0} must be positive and finite")]
    Size(f32),
}

pub type FieldResult<T> = Result<T, FieldError>;
