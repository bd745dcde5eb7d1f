//! `rg-growth` — candidate generation for the road-growth engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`rays`]        | `Fan`, `RayHit`, `cast_rays`, `best_ray`, `probe`        |
//! | [`rule`]        | `BranchingRule` trait, `GrowthRule` dispatch enum        |
//! | [`basic`]       | `BasicRule` (forward only)                               |
//! | [`new_york`]    | `NewYorkRule` (0° / ±90° grid)                           |
//! | [`paris`]       | `ParisRule` (radial, peak-seeking)                       |
//! | [`goals`]       | `GlobalGoals` (seeding, follow-on candidates)            |
//! | [`error`]       | `GrowthError`, `GrowthResult<T>`                         |
//!
//! Nothing here touches a `RoadGraph`.  Candidates are returned as plain
//! `Vec<Edge>`s; the engine decides what to keep.

pub mod basic;
pub mod error;
pub mod goals;
pub mod new_york;
pub mod paris;
pub mod rays;
pub mod rule;


pub use basic::BasicRule;
pub use error::{GrowthError, GrowthResult};
pub use goals::GlobalGoals;
pub use new_york::NewYorkRule;
pub use paris::ParisRule;
pub use rays::{Fan, RayHit};
pub use rule::{BranchingRule, GrowthRule};
