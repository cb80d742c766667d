use crate::branchless::BranchlessIndex;
use crate::echo::Echo;
use crate::exact::{HashSetIndex, SparseHashSetIndex};
use crate::ordered::OrderedMapIndex;
use crate::sorted::SortedVecIndex;
use crate::{IndexError, Value};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A lookup strategy: a structure that is built once from a set of known values and
/// is then queried for the membership of arbitrarily many values.
///
/// An index on which `prepare` was never called behaves as an empty set.
pub trait Strategy: Send + Sync {
    /// Builds the index from the known values, replacing any previous content.
    fn prepare(&mut self, known: &[Value]) -> Result<(), IndexError>;

    /// Returns true if the value is covered by the index.
    fn contains(&self, value: Value) -> bool;

    /// Returns the number of requested values that are covered by the index.
    fn run(&self, requested: &[Value]) -> usize {
        requested.iter().filter(|&&value| self.contains(value)).count()
    }

    /// Same as [`Strategy::run`] but also emits a debug event with the verdict of each query.
    fn run_traced(&self, requested: &[Value]) -> usize {
        let mut found_count = 0;
        for &value in requested {
            let found = self.contains(value);
            tracing::debug!(target: "ipranges::queries", "{} {value}", if found { "found" } else { "not found" });
            found_count += found as usize;
        }
        found_count
    }

    /// Label identifying the strategy in reports.
    fn signature(&self) -> &'static str;

    /// Number of entries stored by the index (ranges or individual values depending on the strategy).
    fn num_entries(&self) -> usize;
}

/// The closed set of available strategies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StrategyKind {
    /// Ranges in an ordered map, keyed by their first value.
    OrderedMap,
    /// Ranges in a sorted vector, looked up with a standard binary search.
    SortedVec,
    /// Ranges in a sorted vector, looked up with a branchless binary search.
    Branchless,
    /// Every known value in a general purpose hash set.
    HashSet,
    /// Every known value in a compact hash set.
    SparseHashSet,
    /// Only echoes the known values, never finds anything.
    Echo,
}

impl StrategyKind {
    /// All strategies that actually answer queries. [`StrategyKind::Echo`] is excluded.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::OrderedMap,
        StrategyKind::SortedVec,
        StrategyKind::Branchless,
        StrategyKind::HashSet,
        StrategyKind::SparseHashSet,
    ];

    /// Creates a new, empty, instance of the strategy.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::OrderedMap => Box::<OrderedMapIndex>::default(),
            StrategyKind::SortedVec => Box::<SortedVecIndex>::default(),
            StrategyKind::Branchless => Box::<BranchlessIndex>::default(),
            StrategyKind::HashSet => Box::<HashSetIndex>::default(),
            StrategyKind::SparseHashSet => Box::<SparseHashSetIndex>::default(),
            StrategyKind::Echo => Box::<Echo>::default(),
        }
    }

    pub fn signature(self) -> &'static str {
        match self {
            StrategyKind::OrderedMap => OrderedMapIndex::SIGNATURE,
            StrategyKind::SortedVec => SortedVecIndex::SIGNATURE,
            StrategyKind::Branchless => BranchlessIndex::SIGNATURE,
            StrategyKind::HashSet => HashSetIndex::SIGNATURE,
            StrategyKind::SparseHashSet => SparseHashSetIndex::SIGNATURE,
            StrategyKind::Echo => Echo::SIGNATURE,
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.signature())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "ordered-map" | "btree" | "stdmap" => Ok(StrategyKind::OrderedMap),
            "sorted-vec" | "binsearch" => Ok(StrategyKind::SortedVec),
            "branchless" | "binsearch-fast" | "binsearchfast" => Ok(StrategyKind::Branchless),
            "hash-set" | "hashset" => Ok(StrategyKind::HashSet),
            "sparse-hash-set" | "sparse" => Ok(StrategyKind::SparseHashSet),
            "echo" | "visual" => Ok(StrategyKind::Echo),
            _ => Err(format!("Unknown strategy: {s}")),
        }
    }
}
