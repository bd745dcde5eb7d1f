//! Per-run counters.

use std::collections::BTreeMap;
use std::fmt;

use rg_constraints::Rejection;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Seed edges scheduled.
    pub seeds:      usize,
    /// Candidates taken from the scheduler.
    pub popped:     u64,
    pub accepted:   u64,
    pub rejected:   u64,
    /// Existing edges split by an accepted candidate.
    pub splits:     u64,
    /// Rejections keyed by [`Rejection::label`].
    pub rejections: BTreeMap<&'static str, u64>,
}

impl GrowthStats {
    pub(crate) fn record_rejection(&mut self, reason: Rejection) {
        self.rejected += 1;
        *self.rejections.entry(reason.label()).or_default() += 1;
    }

    /// Number of rejections for `reason`'s kind.
    pub fn rejected_for(&self, reason: Rejection) -> u64 {
        self.rejections.get(reason.label()).copied().unwrap_or(0)
    }
}

impl fmt::Display for GrowthStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seeds, {} popped, {} accepted, {} rejected, {} splits",
            self.seeds, self.popped, self.accepted, self.rejected, self.splits
        )
    }
}
