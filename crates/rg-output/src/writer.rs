//! The `GraphWriter` trait implemented by backend writers.

use crate::{CommitRow, EdgeRow, NodeRow, OutputResult};

/// Sink for growth output.
///
/// Errors raised while an engine is running are stored by
/// [`GraphOutputObserver`][crate::GraphOutputObserver] and retrieved with
/// `take_error`.
pub trait GraphWriter {
    /// Append one entry to the commit log.
    fn write_commit(&mut self, row: &CommitRow) -> OutputResult<()>;

    /// Write the finalized nodes.
    fn write_nodes(&mut self, rows: &[NodeRow]) -> OutputResult<()>;

    /// Write the finalized edges.
    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
