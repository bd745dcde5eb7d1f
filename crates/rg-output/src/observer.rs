//! `GraphOutputObserver<W>` — bridges `GrowthObserver` to a `GraphWriter`.

use rg_engine::GrowthObserver;
use rg_graph::{Edge, RoadGraph};

use crate::row::{CommitRow, edge_rows, node_rows};
use crate::writer::GraphWriter;
use crate::{OutputError, OutputResult};

/// A [`GrowthObserver`] that logs every commit and, once the run is done,
/// writes the finished nodes and edges to any [`GraphWriter`].
///
/// Observer callbacks cannot fail, so the first write error is stored.  After
/// `engine.run()` returns, check for it with [`take_error`][Self::take_error].
pub struct GraphOutputObserver<W: GraphWriter> {
    writer:     W,
    commits:    u64,
    last_error: Option<OutputError>,
}

impl<W: GraphWriter> GraphOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, commits: 0, last_error: None }
    }

    /// Commits written to the log so far.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: GraphWriter> GrowthObserver for GraphOutputObserver<W> {
    fn on_edge_committed(&mut self, edge: &Edge, index: u64) {
        let result = self.writer.write_commit(&CommitRow::new(edge, index));
        if result.is_ok() {
            self.commits += 1;
        }
        self.store_err(result);
    }

    fn on_finished(&mut self, graph: &RoadGraph) {
        let result = self
            .writer
            .write_nodes(&node_rows(graph))
            .and_then(|()| self.writer.write_edges(&edge_rows(graph)))
            .and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
