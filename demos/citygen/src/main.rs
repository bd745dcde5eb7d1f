//! citygen — grow a road network on a synthetic field.
//!
//! ```text
//! citygen [config.json]
//! ```
//!
//! Without an argument the built-in configuration below is used.  A JSON
//! file may set any `GrowthConfig` field; missing fields keep their defaults.
//! Output lands in `output/citygen/`.

mod field;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use rg_constraints::Rejection;
use rg_core::{EdgeId, GrowthConfig, SeedStrategy};
use rg_engine::{EngineBuilder, GrowthObserver};
use rg_field::FieldOracle;
use rg_graph::{Edge, RoadGraph};
use rg_output::{CsvWriter, GraphOutputObserver, GraphWriter};

use field::{FIELD_SIZE, build_field};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const MAX_ITERATIONS: u64 = 200_000;
const PROGRESS_EVERY: u64 = 1_000; // commits between progress lines
const OUTPUT_DIR:     &str = "output/citygen";

// ── Observer wrapper that reports progress ───────────────────────────────────

struct ProgressObserver<W: GraphWriter> {
    inner:     GraphOutputObserver<W>,
    committed: u64,
}

impl<W: GraphWriter> ProgressObserver<W> {
    fn new(inner: GraphOutputObserver<W>) -> Self {
        Self { inner, committed: 0 }
    }
}

impl<W: GraphWriter> GrowthObserver for ProgressObserver<W> {
    fn on_seeded(&mut self, seeds: &[Edge]) {
        println!("Seeded {} highway edges", seeds.len());
        self.inner.on_seeded(seeds);
    }

    fn on_edge_committed(&mut self, edge: &Edge, index: u64) {
        self.committed += 1;
        if self.committed.is_multiple_of(PROGRESS_EVERY) {
            info!(committed = self.committed, "growing");
        }
        self.inner.on_edge_committed(edge, index);
    }

    fn on_edge_rejected(&mut self, candidate: &Edge, reason: Rejection) {
        self.inner.on_edge_rejected(candidate, reason);
    }

    fn on_edge_split(&mut self, replaced: EdgeId, halves: [EdgeId; 2]) {
        self.inner.on_edge_split(replaced, halves);
    }

    fn on_finished(&mut self, graph: &RoadGraph) {
        self.inner.on_finished(graph);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config() -> Result<GrowthConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let config: GrowthConfig =
                serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
            println!("Config: {path}");
            Ok(config)
        }
        None => Ok(GrowthConfig {
            seed:           SEED,
            seed_strategy:  SeedStrategy::EveryPeak,
            max_iterations: Some(MAX_ITERATIONS),
            ..GrowthConfig::default()
        }),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    println!("=== citygen — procedural road growth ===");
    let config = load_config()?;
    println!(
        "Field: {FIELD_SIZE} × {FIELD_SIZE}  |  Seed: {}  |  Strategy: {:?}",
        config.seed, config.seed_strategy
    );

    // 1. Build the field.
    let field = build_field()?;
    println!("Population peaks: {}", field.density_peaks().len());
    println!();

    // 2. Build the engine.
    let mut engine = EngineBuilder::new(config).field(field).build()?;

    // 3. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(GraphOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    engine.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let stats = engine.stats().clone();
    let graph = engine.into_graph()?;
    println!("Growth complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {stats}");
    println!("  nodes: {}  |  edges: {}", graph.node_count(), graph.edge_count());
    println!("  commits.csv : {} rows", obs.inner.commits());
    println!();

    println!("{:<22} {:>8}", "Rejection", "Count");
    println!("{}", "-".repeat(31));
    for (label, count) in &stats.rejections {
        println!("{label:<22} {count:>8}");
    }
    println!();

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, node) in graph.nodes() {
        *kinds.entry(node.kind.map_or("isolated", |k| k.as_str())).or_default() += 1;
    }
    println!("{:<22} {:>8}", "Node kind", "Count");
    println!("{}", "-".repeat(31));
    for (kind, count) in kinds {
        println!("{kind:<22} {count:>8}");
    }

    Ok(())
}
