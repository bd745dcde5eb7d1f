//! Scheduling priority.
//!
//! A candidate's priority is both its position in the scheduler (lower is
//! popped sooner) and its "generation time": a follow-on edge is scheduled at
//! `parent + class_weight`, so highways (small weight) outrun streets.

use std::fmt;

/// Priority of a pending or committed road edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority(pub u32);

impl Priority {
    /// Priority of seed roads.
    pub const ZERO: Priority = Priority(0);

    /// Priority `weight` generations after `self`.
    #[inline]
    pub fn after(self, weight: u32) -> Priority {
        Priority(self.0.saturating_add(weight))
    }
}

impl std::ops::Add<u32> for Priority {
    type Output = Priority;
    #[inline]
    fn add(self, rhs: u32) -> Priority {
        self.after(rhs)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
