//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `commits.csv`
//! - `nodes.csv`
//! - `edges.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::GraphWriter;
use crate::{CommitRow, EdgeRow, NodeRow, OutputResult};

/// Writes growth output to three CSV files.
pub struct CsvWriter {
    commits:  Writer<File>,
    nodes:    Writer<File>,
    edges:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files in it and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut commits = Writer::from_path(dir.join("commits.csv"))?;
        commits.write_record(["index", "start_x", "start_y", "end_x", "end_y", "class", "priority"])?;

        let mut nodes = Writer::from_path(dir.join("nodes.csv"))?;
        nodes.write_record(["node_id", "x", "y", "kind", "on_highway", "degree"])?;

        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(["edge_id", "start_node", "end_node", "class", "length"])?;

        Ok(Self { commits, nodes, edges, finished: false })
    }
}

impl GraphWriter for CsvWriter {
    fn write_commit(&mut self, row: &CommitRow) -> OutputResult<()> {
        self.commits.write_record(&[
            row.index.to_string(),
            row.start_x.to_string(),
            row.start_y.to_string(),
            row.end_x.to_string(),
            row.end_y.to_string(),
            row.class.as_str().to_owned(),
            row.priority.to_string(),
        ])?;
        Ok(())
    }

    fn write_nodes(&mut self, rows: &[NodeRow]) -> OutputResult<()> {
        for row in rows {
            self.nodes.write_record(&[
                row.node_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.kind.map_or("", |k| k.as_str()).to_owned(),
                (row.on_highway as u8).to_string(),
                row.degree.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()> {
        for row in rows {
            self.edges.write_record(&[
                row.edge_id.to_string(),
                row.start_node.to_string(),
                row.end_node.to_string(),
                row.class.as_str().to_owned(),
                row.length.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.commits.flush()?;
        self.nodes.flush()?;
        self.edges.flush()?;
        Ok(())
    }
}
