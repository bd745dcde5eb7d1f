//! `rg-constraints` — decide whether, and in what shape, a candidate joins
//! the road graph.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`legalizer`]     | `PositionLegalizer` (bounds, water, slope; bounded retry) |
//! | [`intersection`]  | `IntersectionResolver`, `Resolution`, `PlannedSplit`      |
//! | [`local`]         | `LocalConstraints` (legalize → resolve → length)          |
//! | [`verdict`]       | `Rejection`                                               |
//!
//! # Pipeline
//!
//! ```text
//! candidate ─► legalize ─► resolve ─► length ≥ min ─► Resolution
//!                 │           │            │
//!                 └───────────┴────────────┴──► Rejection (dropped)
//! ```

pub mod intersection;
pub mod legalizer;
pub mod local;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use intersection::{Applied, IntersectionResolver, PlannedSplit, Resolution, Stage};
pub use legalizer::PositionLegalizer;
pub use local::LocalConstraints;
pub use verdict::Rejection;

/// Slack allowed below a class minimum length, absorbing `f32` error in
/// endpoints placed exactly `min_length` away.
pub const LENGTH_TOLERANCE: f32 = 1e-3;
