//! `rg-engine` — drives one road-growth run from seeds to a finished graph.
//!
//! # State machine
//!
//! ```text
//! Seeding ──seed()──► Growing ──step()…──► Finalizing ──finalize()──► Done
//!                        │                      ▲
//!                        └── scheduler empty, ──┘
//!                            iteration cap, or observer stop
//! ```
//!
//! Each `step` pops the lowest-priority candidate, runs it through
//! [`rg_constraints::LocalConstraints`], commits it on acceptance and schedules
//! its follow-ons at `parent priority + class weight`.  A rejected candidate
//! is counted and dropped.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rg_core::GrowthConfig;
//! use rg_engine::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(GrowthConfig::default())
//!     .field(field)
//!     .build()?;
//! engine.run(&mut NoopObserver)?;
//! let graph = engine.into_graph()?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::{EngineState, GrowthEngine};
pub use error::{EngineError, EngineResult};
pub use observer::{GrowthObserver, NoopObserver};
pub use stats::GrowthStats;
