//! `rg-field` — the field oracle consumed by road growth.
//!
//! Road growth never sees terrain data directly.  It asks a [`FieldOracle`]
//! for height, population density, growth style, water, and bounds at world
//! positions.  How those fields are produced (noise, imported textures) is
//! outside this workspace; [`GridField`] is a raster-backed oracle built from
//! whatever arrays the application supplies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`oracle`]    | `FieldOracle` trait                                        |
//! | [`context`]   | `FieldContext` (oracle + config, slope helper)             |
//! | [`grid`]      | `GridField`, `GridFieldBuilder`                            |
//! | [`peaks`]     | population-peak detection over a raster                    |
//! | [`error`]     | `FieldError`, `FieldResult<T>`                             |
//!
//! # Out-of-field queries
//!
//! Queries outside the field never fail.  They return sentinels
//! ([`OUTSIDE_POPULATION`], [`OUTSIDE_HEIGHT`], `GrowthStyle::Basic`) and log
//! a `tracing` warning.

pub mod context;
pub mod error;
pub mod grid;
pub mod oracle;
pub mod peaks;


pub use context::FieldContext;
pub use error::{FieldError, FieldResult};
pub use grid::{GridField, GridFieldBuilder};
pub use oracle::FieldOracle;
pub use peaks::detect_peaks;

/// Population reported for positions outside the field.
pub const OUTSIDE_POPULATION: f32 = 0.0;

/// Height reported for positions outside the field.
pub const OUTSIDE_HEIGHT: f32 = -10_000.0;
