//! `rg-schedule` — the priority scheduler that orders pending road candidates.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`scheduler`]  | `PriorityScheduler<T>` (`BTreeMap<Priority, VecDeque<T>>`) |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Ordering
//!
//! ```text
//! pop order = ascending Priority, then FIFO within a priority
//! ```

pub mod error;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::PriorityScheduler;
