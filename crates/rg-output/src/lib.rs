//! `rg-output` — writers for the commit log and the finished road graph.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `commits.csv`, `nodes.csv`, `edges.csv`      |
//!
//! Backends implement [`GraphWriter`] and are driven by
//! [`GraphOutputObserver`], which implements `rg_engine::GrowthObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rg_output::{CsvWriter, GraphOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = GraphOutputObserver::new(writer);
//! engine.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::GraphOutputObserver;
pub use row::{CommitRow, EdgeRow, NodeRow};
pub use writer::GraphWriter;
