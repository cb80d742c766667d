use clap::{Args, value_parser};
use ipranges_index::StrategyKind;
use std::path::PathBuf;
use std::str::FromStr;

/// Newtype wrapper to allow parsing comma-separated strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyList(pub Vec<StrategyKind>);

impl Default for StrategyList {
    fn default() -> Self {
        StrategyList(StrategyKind::ALL.to_vec())
    }
}

impl FromStr for StrategyList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim() == "all" {
            return Ok(StrategyList::default());
        }
        s.split(',')
            .map(|item| item.trim().parse())
            .collect::<Result<Vec<StrategyKind>, _>>()
            .map(StrategyList)
    }
}

/// Options of a benchmark run. Built once from the command line and never modified afterwards.
#[derive(Debug, Clone, Args)]
pub struct BenchConfig {
    /// File with one known IP (as an unsigned integer) per line
    #[arg(long = "known-ips-file", value_name = "FILE", default_value = "ips.data")]
    pub known_file: PathBuf,

    /// File with the IPs to look up, both known and unknown
    #[arg(long = "requested-ips-file", value_name = "FILE", default_value = "requested_ips.data")]
    pub requested_file: PathBuf,

    /// Number of times the requested IPs are looked up by each strategy
    #[arg(long, value_name = "N", default_value_t = 1000)]
    pub iterations: usize,

    /// Print whether each requested IP was found (at the debug log level)
    #[arg(long)]
    pub debug: bool,

    /// Comma-separated list of strategies to run, among
    /// ordered-map, sorted-vec, branchless, hash-set, sparse-hash-set and echo
    #[arg(long = "strategies", value_name = "LIST", default_value = "all")]
    pub strategies: StrategyList,

    /// Trust the known IPs file to be sorted and skip sorting it before building the indices
    #[arg(long)]
    pub assume_sorted: bool,
}

impl BenchConfig {
    /// Configuration with all default values, reading the given files.
    pub fn new(known_file: impl Into<PathBuf>, requested_file: impl Into<PathBuf>) -> Self {
        BenchConfig {
            known_file: known_file.into(),
            requested_file: requested_file.into(),
            iterations: 1000,
            debug: false,
            strategies: StrategyList::default(),
            assume_sorted: false,
        }
    }
}

/// Options for generating a random data set.
#[derive(Debug, Clone, Args)]
pub struct GenerateConfig {
    /// Output file for the generated IPs, one per line
    #[arg(long = "ips-file", value_name = "FILE", default_value = "ips.data")]
    pub ips_file: PathBuf,

    /// If set, the generated ranges are also written to this file, as `<range_begin>, <range_cardinality>` lines
    #[arg(long = "csv-file", value_name = "FILE")]
    pub csv_file: Option<PathBuf>,

    /// If set, a set of IPs to look up (half of them known) is written to this file
    #[arg(long = "requested-ips-file", value_name = "FILE")]
    pub requested_file: Option<PathBuf>,

    /// Number of ranges
    #[arg(long, value_name = "N", default_value_t = 10, value_parser = value_parser!(u32).range(1..))]
    pub num_ranges: u32,

    /// Upper bound (exclusive) of the generated IPs
    #[arg(
        long,
        visible_alias = "rng",
        value_name = "N",
        default_value_t = 1 << 32,
        value_parser = value_parser!(u64).range(1..=(1 << 32)),
    )]
    pub max_value: u64,

    /// Approximate number of known IPs, spread over all ranges (at most 2^32)
    #[arg(long, value_name = "N", default_value_t = 1000, value_parser = value_parser!(u64).range(..=(1 << 32)))]
    pub total_addresses: u64,

    /// Number of IPs to look up
    #[arg(long, value_name = "N", default_value_t = 1000)]
    pub requested: usize,

    /// Seed of the random number generator
    #[arg(long)]
    pub seed: Option<u64>,
}
