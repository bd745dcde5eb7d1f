//! Growth observer trait for progress reporting and data collection.

use rg_constraints::Rejection;
use rg_core::EdgeId;
use rg_graph::{Edge, RoadGraph};

/// Callbacks invoked by [`GrowthEngine`][crate::GrowthEngine] as the run
/// progresses.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — live preview
///
/// ```rust,ignore
/// struct Preview { every: u64 }
///
/// impl GrowthObserver for Preview {
///     fn on_edge_committed(&mut self, edge: &Edge, index: u64) {
///         if index % self.every == 0 {
///             println!("#{index}: {} → {}", edge.start(), edge.end());
///         }
///     }
/// }
/// ```
pub trait GrowthObserver {
    /// Called once after the seed roads have been scheduled.
    fn on_seeded(&mut self, _seeds: &[Edge]) {}

    /// Called after each accepted candidate is committed.
    ///
    /// `index` counts commits from zero in the order they happened.
    fn on_edge_committed(&mut self, _edge: &Edge, _index: u64) {}

    /// Called for every dropped candidate.
    fn on_edge_rejected(&mut self, _candidate: &Edge, _reason: Rejection) {}

    /// Called when a commit split an existing edge into `halves`.
    fn on_edge_split(&mut self, _replaced: EdgeId, _halves: [EdgeId; 2]) {}

    /// Checked between steps; returning `true` ends growth early and
    /// finalizes what has been committed.
    fn should_stop(&mut self) -> bool {
        false
    }

    /// Called once with the finalized graph.
    fn on_finished(&mut self, _graph: &RoadGraph) {}
}

/// A [`GrowthObserver`] that does nothing.
pub struct NoopObserver;

impl GrowthObserver for NoopObserver {}
