//! The `GrowthEngine` struct and its growth loop.

use std::fmt;

use tracing::{debug, info, trace, warn};

use rg_constraints::LocalConstraints;
use rg_core::{GrowthConfig, GrowthRng};
use rg_field::{FieldContext, FieldOracle};
use rg_graph::{Edge, RoadGraph};
use rg_growth::GlobalGoals;
use rg_schedule::PriorityScheduler;

use crate::{EngineError, EngineResult, GrowthObserver, GrowthStats};

// ── EngineState ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Seeding,
    Growing,
    Finalizing,
    Done,
}

impl EngineState {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineState::Seeding    => "seeding",
            EngineState::Growing    => "growing",
            EngineState::Finalizing => "finalizing",
            EngineState::Done       => "done",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── GrowthEngine ──────────────────────────────────────────────────────────────

/// One road-growth run.
///
/// Owns the scheduler, the graph under construction and the random stream for
/// the whole run; the same configuration, field and seed always produce the
/// same graph.  Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct GrowthEngine<F: FieldOracle> {
    config:    GrowthConfig,
    field:     F,
    rng:       GrowthRng,
    scheduler: PriorityScheduler<Edge>,
    graph:     RoadGraph,
    state:     EngineState,
    stats:     GrowthStats,
}

impl<F: FieldOracle> GrowthEngine<F> {
    pub(crate) fn new(config: GrowthConfig, field: F, rng: GrowthRng) -> Self {
        Self {
            config,
            field,
            rng,
            scheduler: PriorityScheduler::new(),
            graph:     RoadGraph::new(),
            state:     EngineState::Seeding,
            stats:     GrowthStats::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn stats(&self) -> &GrowthStats {
        &self.stats
    }

    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Candidates still waiting in the scheduler.
    pub fn pending(&self) -> usize {
        self.scheduler.len()
    }

    /// The finished graph.  Fails with `NotFinished` before `Done`.
    pub fn graph(&self) -> EngineResult<&RoadGraph> {
        match self.state {
            EngineState::Done => Ok(&self.graph),
            state             => Err(EngineError::NotFinished(state)),
        }
    }

    /// Consume the engine, returning the finished graph.
    pub fn into_graph(self) -> EngineResult<RoadGraph> {
        match self.state {
            EngineState::Done => Ok(self.graph),
            state             => Err(EngineError::NotFinished(state)),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Drive the run from its current state to `Done`.
    pub fn run<O: GrowthObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        loop {
            match self.state {
                EngineState::Seeding => {
                    self.seed(observer)?;
                }
                EngineState::Growing => {
                    if observer.should_stop() {
                        info!(popped = self.stats.popped, "growth stopped by observer");
                        self.state = EngineState::Finalizing;
                        continue;
                    }
                    self.step(observer)?;
                }
                EngineState::Finalizing => self.finalize(observer)?,
                EngineState::Done => return Ok(()),
            }
        }
    }

    /// Schedule the seed roads at priority zero and enter `Growing`.
    ///
    /// Returns the number of seed edges.
    pub fn seed<O: GrowthObserver>(&mut self, observer: &mut O) -> EngineResult<usize> {
        self.expect_state("seed", EngineState::Seeding)?;

        let ctx = FieldContext::new(&self.field, &self.config);
        let seeds = GlobalGoals::generate_seed_roads(self.config.seed_strategy, &ctx, &mut self.rng)?;
        for seed in &seeds {
            self.scheduler.push(seed.clone(), seed.priority);
        }
        self.stats.seeds = seeds.len();
        info!(strategy = ?self.config.seed_strategy, seeds = seeds.len(), "growth seeded");
        observer.on_seeded(&seeds);

        self.state = EngineState::Growing;
        Ok(seeds.len())
    }

    /// Process one candidate.
    ///
    /// Returns `false`, and moves to `Finalizing`, once the scheduler is empty
    /// or the iteration cap is reached.
    pub fn step<O: GrowthObserver>(&mut self, observer: &mut O) -> EngineResult<bool> {
        self.expect_state("step", EngineState::Growing)?;

        if let Some(cap) = self.config.max_iterations {
            if self.stats.popped >= cap {
                warn!(
                    cap,
                    pending = self.scheduler.len(),
                    next = ?self.scheduler.next_priority(),
                    "iteration cap reached; finalizing early"
                );
                self.state = EngineState::Finalizing;
                return Ok(false);
            }
        }
        if self.scheduler.is_empty() {
            self.state = EngineState::Finalizing;
            return Ok(false);
        }

        let candidate = self.scheduler.pop()?;
        self.stats.popped += 1;

        let ctx = FieldContext::new(&self.field, &self.config);
        let resolution = match LocalConstraints::validate(&candidate, &self.graph, &ctx, &mut self.rng) {
            Ok(resolution) => resolution,
            Err(reason) => {
                debug!(%reason, priority = %candidate.priority, class = %candidate.class, "candidate rejected");
                self.stats.record_rejection(reason);
                observer.on_edge_rejected(&candidate, reason);
                return Ok(true);
            }
        };

        let edge = resolution.edge.clone();
        let applied = resolution.apply(&mut self.graph)?;
        let index = self.stats.accepted;
        self.stats.accepted += 1;

        if let Some((replaced, halves)) = applied.split {
            self.stats.splits += 1;
            debug!(%replaced, first = %halves[0], second = %halves[1], "edge split");
            observer.on_edge_split(replaced, halves);
        }
        trace!(id = %applied.edge, index, class = %edge.class, priority = %edge.priority, "edge committed");
        observer.on_edge_committed(&edge, index);

        for next in GlobalGoals::generate_follow_on_roads(&edge, &ctx, &mut self.rng) {
            let priority = next.priority;
            self.scheduler.push(next, priority);
        }
        Ok(true)
    }

    /// Classify nodes and enter `Done`.
    ///
    /// Valid while `Growing` (ending growth early, pending candidates are
    /// discarded) or `Finalizing`.
    pub fn finalize<O: GrowthObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        if !matches!(self.state, EngineState::Growing | EngineState::Finalizing) {
            return Err(EngineError::InvalidState { op: "finalize", state: self.state });
        }

        let discarded = self.scheduler.len();
        self.scheduler.clear();
        self.graph.finalize();
        self.state = EngineState::Done;

        info!(
            accepted  = self.stats.accepted,
            rejected  = self.stats.rejected,
            splits    = self.stats.splits,
            discarded,
            nodes     = self.graph.node_count(),
            edges     = self.graph.edge_count(),
            "growth finished"
        );
        observer.on_finished(&self.graph);
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn expect_state(&self, op: &'static str, expected: EngineState) -> EngineResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidState { op, state: self.state })
        }
    }
}
