//! Times the lookups of each strategy over the same requested values.

use crate::config::BenchConfig;
use crate::input::load_values;
use anyhow::{Context, Result};
use ipranges_index::{Strategy, StrategyKind, Value};
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::time::{Duration, Instant};

/// Outcome of all iterations of a single strategy.
#[derive(Clone, Debug)]
pub struct Report {
    pub signature: &'static str,
    pub elapsed: Duration,
    /// Number of requested values found, summed over all iterations.
    pub found: usize,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "took {} microseconds, found {}", self.elapsed.as_micros(), self.found)
    }
}

/// Known and requested values, as used by all strategies.
pub struct Dataset {
    pub known: Vec<Value>,
    pub requested: Vec<Value>,
}

impl Dataset {
    /// Reads both files of the configuration. Known values are sorted unless the configuration states they already are.
    pub fn load(config: &BenchConfig) -> Result<Dataset> {
        let mut known = load_values(&config.known_file).context("Could not load the known values")?;
        if !config.assume_sorted {
            if !known.is_sorted() {
                tracing::info!("Known values are not sorted, sorting them.");
            }
            known.sort_unstable();
            known.dedup();
        }
        let requested = load_values(&config.requested_file).context("Could not load the requested values")?;
        Ok(Dataset { known, requested })
    }
}

/// Builds every strategy from the known values.
/// Fails as soon as one of them cannot be built.
pub fn prepare_all(
    kinds: &[StrategyKind],
    known: &[Value],
    out: &mut impl Write,
) -> Result<Vec<Box<dyn Strategy>>> {
    writeln!(out, "## preparing strategies")?;
    let mut strategies = Vec::with_capacity(kinds.len());
    for kind in kinds {
        writeln!(out, "{kind}")?;
        let mut strategy = kind.build();
        let start = Instant::now();
        strategy
            .prepare(known)
            .with_context(|| format!("Could not prepare strategy {kind}"))?;
        tracing::info!(
            "{kind}: {} entries built in {} microseconds",
            strategy.num_entries(),
            start.elapsed().as_micros()
        );
        strategies.push(strategy);
    }
    Ok(strategies)
}

/// Looks up all requested values `iterations` times.
/// If `debug` is set, the verdict of every single query is traced.
pub fn run_one(strategy: &dyn Strategy, requested: &[Value], iterations: usize, debug: bool) -> Report {
    let start = Instant::now();
    let mut found = 0;
    for _ in 0..iterations {
        let requested = std::hint::black_box(requested);
        found += if debug {
            strategy.run_traced(requested)
        } else {
            strategy.run(requested)
        };
    }
    Report {
        signature: strategy.signature(),
        elapsed: start.elapsed(),
        found,
    }
}

/// Runs every strategy in turn and prints a report for each of them.
pub fn run_all(
    strategies: &[Box<dyn Strategy>],
    requested: &[Value],
    config: &BenchConfig,
    out: &mut impl Write,
) -> Result<Vec<Report>> {
    writeln!(out, "## running strategies")?;
    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        writeln!(out, "{}", strategy.signature())?;
        let report = run_one(strategy.as_ref(), requested, config.iterations, config.debug);
        writeln!(out, "{report}")?;
        reports.push(report);
    }

    let answering = reports.iter().filter(|r| r.signature != StrategyKind::Echo.signature());
    if !answering.clone().map(|r| r.found).all_equal() {
        tracing::warn!(
            "Strategies disagree on the number of values found: {}",
            answering.map(|r| format!("{}={}", r.signature, r.found)).join(", ")
        );
    }
    Ok(reports)
}

/// Full benchmark: loads the data set, builds all strategies and then times them.
pub fn bench(config: &BenchConfig, out: &mut impl Write) -> Result<Vec<Report>> {
    let dataset = Dataset::load(config)?;
    let strategies = prepare_all(&config.strategies.0, &dataset.known, out)?;
    run_all(&strategies, &dataset.requested, config, out)
}
