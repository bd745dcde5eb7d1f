//! Why a candidate was dropped.
//!
//! A rejection is an ordinary outcome of growth, not a failure of the run:
//! the engine counts it, logs it at `debug`, and moves on.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    #[error("no legal placement after {attempts} attempts")]
    PlacementExhausted { attempts: u32 },

    #[error("duplicates an existing edge")]
    Duplicate,

    #[error("meets an existing edge at too sharp an angle")]
    SharpAngle,

    #[error("splitting the crossed edge would leave a piece that is too short")]
    ShortSplit,

    #[error("shorter than the class minimum length")]
    TooShort,

    #[error("snapped edge crosses an existing edge")]
    SnapCrosses,

    #[error("resolved endpoint is not a legal placement")]
    IllegalPlacement,

    #[error("candidate has zero length")]
    Degenerate,
}

impl Rejection {
    /// Stable snake_case label for statistics and logs.
    pub fn label(self) -> &'static str {
        match self {
            Rejection::PlacementExhausted { .. } => "placement_exhausted",
            Rejection::Duplicate                 => "duplicate",
            Rejection::SharpAngle                => "sharp_angle",
            Rejection::ShortSplit                => "short_split",
            Rejection::TooShort                  => "too_short",
            Rejection::SnapCrosses               => "snap_crosses",
            Rejection::IllegalPlacement          => "illegal_placement",
            Rejection::Degenerate                => "degenerate",
        }
    }
}
