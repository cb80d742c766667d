//! A binary search whose control flow does not depend on the searched data.
//!
//! The classical binary search takes a branch on each comparison, which is mispredicted about half of the time
//! when the queried values are random. Here, the search window is halved at each step regardless of the outcome
//! of the comparison, and the comparison result is only used arithmetically to select the new lower bound.
//! The number of iterations only depends on the number of intervals.

use crate::sorted::covered_at;
use crate::interval::covered_values;
use crate::{IndexError, Interval, Strategy, Value, compact};

/// Returns the index of the first interval whose start is greater than or equal to `value`,
/// or `intervals.len()` if there is none.
///
/// Result is always identical to [`crate::sorted::lower_bound`].
#[inline]
pub fn branchless_lower_bound(intervals: &[Interval], value: Value) -> usize {
    // invariant: the result is in [low, low + size] and low + size <= intervals.len()
    let mut low = 0;
    let mut size = intervals.len();
    while size > 0 {
        let half = size / 2;
        let other_half = size - half;
        let pivot = intervals[low + half].start;
        low += other_half * usize::from(pivot < value);
        size = half;
    }
    low
}

/// Ranges of known values stored in a sorted vector, looked up with [`branchless_lower_bound`].
#[derive(Clone, Default, Debug)]
pub struct BranchlessIndex {
    intervals: Vec<Interval>,
}

impl BranchlessIndex {
    pub const SIGNATURE: &'static str = "BRANCHLESS";

    pub fn new(known: &[Value]) -> Result<Self, IndexError> {
        let mut index = Self::default();
        index.prepare(known)?;
        Ok(index)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

impl Strategy for BranchlessIndex {
    fn prepare(&mut self, known: &[Value]) -> Result<(), IndexError> {
        self.intervals = compact(known)?;
        tracing::debug!("{} ranges covering {} values", self.intervals.len(), covered_values(&self.intervals));
        Ok(())
    }

    fn contains(&self, value: Value) -> bool {
        let pos = branchless_lower_bound(&self.intervals, value);
        covered_at(&self.intervals, pos, value)
    }

    fn signature(&self) -> &'static str {
        Self::SIGNATURE
    }

    fn num_entries(&self) -> usize {
        self.intervals.len()
    }
}
