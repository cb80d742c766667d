//! Generation of random data sets: known IPs grouped in a few ranges and requested IPs mixing known and unknown ones.

use crate::config::GenerateConfig;
use anyhow::{Context, Result};
use ipranges_index::Value;
use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A range of known values, as its first value and number of values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeSpec {
    pub begin: Value,
    pub cardinality: u64,
}

/// Draws `num_ranges` ranges with random starts in `[0, max_value)`.
/// Lengths are random and scaled so that they add up to roughly `total_addresses`, each range having at least one value.
/// Ranges are sorted by their start but may overlap.
pub fn random_ranges(rng: &mut impl Rng, num_ranges: u32, max_value: u64, total_addresses: u64) -> Vec<RangeSpec> {
    let weights = (0..num_ranges).map(|_| rng.random::<f64>()).collect_vec();
    let starts = (0..num_ranges).map(|_| rng.random_range(0..max_value)).sorted_unstable().collect_vec();

    let sum: f64 = weights.iter().sum();
    let coeff = if sum > 0.0 { total_addresses as f64 / sum } else { 0.0 };
    starts
        .into_iter()
        .zip(weights)
        .map(|(start, weight)| RangeSpec {
            begin: start as Value,
            cardinality: ((weight * coeff).round() as u64).max(1),
        })
        .collect()
}

/// All values of the ranges, sorted and without duplicates. Ranges are truncated at `u32::MAX`.
pub fn range_values(ranges: &[RangeSpec]) -> Vec<Value> {
    let mut values = ranges
        .iter()
        .flat_map(|r| {
            let end = (r.begin as u64).saturating_add(r.cardinality - 1).min(Value::MAX as u64) as Value;
            r.begin..=end
        })
        .collect_vec();
    values.sort_unstable();
    values.dedup();
    values
}

/// Draws `count` values to look up: each is, with equal probability, one of the known values
/// or a uniformly random value in `[0, max_value)`.
pub fn requested_values(rng: &mut impl Rng, known: &[Value], count: usize, max_value: u64) -> Vec<Value> {
    (0..count)
        .map(|_| {
            if !known.is_empty() && rng.random_bool(0.5) {
                known[rng.random_range(0..known.len())]
            } else {
                rng.random_range(0..max_value) as Value
            }
        })
        .collect()
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Writes one value per line.
pub fn write_values(path: &Path, values: &[Value]) -> Result<()> {
    let mut out = create(path)?;
    for value in values {
        writeln!(out, "{value}")?;
    }
    out.flush()?;
    Ok(())
}

/// Writes one `<range_begin>, <range_cardinality>` line per range.
pub fn write_ranges(path: &Path, ranges: &[RangeSpec]) -> Result<()> {
    let mut out = create(path)?;
    for range in ranges {
        writeln!(out, "{}, {}", range.begin, range.cardinality)?;
    }
    out.flush()?;
    Ok(())
}

/// Generates a data set and writes it to the files requested in the configuration.
pub fn generate(config: &GenerateConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Generating with seed {seed}");
    let mut rng = SmallRng::seed_from_u64(seed);

    let ranges = random_ranges(&mut rng, config.num_ranges, config.max_value, config.total_addresses);
    for (a, b) in ranges.iter().tuple_windows() {
        if b.begin as u64 <= (a.begin as u64).saturating_add(a.cardinality) {
            tracing::warn!("Ranges starting at {} and {} overlap or are adjacent", a.begin, b.begin);
        }
    }
    let known = range_values(&ranges);
    write_values(&config.ips_file, &known)?;
    tracing::info!("Wrote {} values to {}", known.len(), config.ips_file.display());

    if let Some(csv_file) = &config.csv_file {
        write_ranges(csv_file, &ranges)?;
    }
    if let Some(requested_file) = &config.requested_file {
        let requested = requested_values(&mut rng, &known, config.requested, config.max_value);
        write_values(requested_file, &requested)?;
        tracing::info!("Wrote {} values to {}", requested.len(), requested_file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ranges() {
        let mut rng = SmallRng::seed_from_u64(79837224973);
        let ranges = random_ranges(&mut rng, 10, 1 << 32, 1000);
        assert_eq!(ranges.len(), 10);
        assert!(ranges.iter().tuple_windows().all(|(a, b)| a.begin <= b.begin));
        assert!(ranges.iter().all(|r| r.cardinality >= 1));
        let total: u64 = ranges.iter().map(|r| r.cardinality).sum();
        assert!((990..=1010).contains(&total), "{total}");
    }

    #[test]
    fn test_range_values() {
        let ranges = [
            RangeSpec { begin: 1, cardinality: 3 },
            RangeSpec { begin: 2, cardinality: 2 },
            RangeSpec { begin: 10, cardinality: 1 },
            RangeSpec {
                begin: u32::MAX - 1,
                cardinality: 10,
            },
        ];
        assert_eq!(range_values(&ranges), vec![1, 2, 3, 10, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn test_huge_cardinality() {
        let ranges = [RangeSpec {
            begin: u32::MAX - 2,
            cardinality: u64::MAX,
        }];
        assert_eq!(range_values(&ranges), vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);

        let mut rng = SmallRng::seed_from_u64(7);
        let ranges = random_ranges(&mut rng, 3, 1 << 32, u64::MAX);
        assert!(ranges.iter().all(|r| r.cardinality >= 1));
    }

    #[test]
    fn test_requested_values() {
        let mut rng = SmallRng::seed_from_u64(42);
        let known = [5, 6, 7];
        let requested = requested_values(&mut rng, &known, 1000, 100);
        assert_eq!(requested.len(), 1000);
        assert!(requested.iter().all(|&v| v < 100));
        let num_known = requested.iter().filter(|v| known.contains(v)).count();
        assert!(num_known > 400, "{num_known}");
    }

    #[test]
    fn test_reproducible() {
        let draw = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            range_values(&random_ranges(&mut rng, 5, 1 << 20, 100))
        };
        assert_eq!(draw(3), draw(3));
    }
}
