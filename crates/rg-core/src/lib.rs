//! `rg-core` — foundational types for the `roadgrow` road-network generator.
//!
//! Every other `rg-*` crate depends on this one.  It has no `rg-*`
//! dependencies and only two external ones (`rand`, `thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`geom`]        | `Vec2`, angle helpers, line / segment intersection        |
//! | [`ids`]         | `NodeId`, `EdgeId`                                        |
//! | [`priority`]    | `Priority` (scheduling key and generation time)           |
//! | [`rng`]         | `GrowthRng` (injected, seeded run RNG)                    |
//! | [`road`]        | `RoadClass`, `GrowthStyle`, `NodeKind`                    |
//! | [`config`]      | `GrowthConfig`, `ClassParams`, `SeedStrategy`, `HeightPrecision` |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod priority;
pub mod rng;
pub mod road;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ClassParams, GrowthConfig, HeightPrecision, SeedStrategy};
pub use error::{CoreError, CoreResult};
pub use geom::{POSITION_EPSILON, Vec2};
pub use ids::{EdgeId, NodeId};
pub use priority::Priority;
pub use rng::GrowthRng;
pub use road::{GrowthStyle, NodeKind, RoadClass};
