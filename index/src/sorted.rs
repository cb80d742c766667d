use crate::interval::covered_values;
use crate::{IndexError, Interval, Strategy, Value, compact};

/// Ranges of known values stored in a vector sorted by their first value.
/// Lookups rely on a standard (branching) binary search.
#[derive(Clone, Default, Debug)]
pub struct SortedVecIndex {
    intervals: Vec<Interval>,
}

impl SortedVecIndex {
    pub const SIGNATURE: &'static str = "SORTED_VEC";

    pub fn new(known: &[Value]) -> Result<Self, IndexError> {
        let mut index = Self::default();
        index.prepare(known)?;
        Ok(index)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

/// Returns the index of the first interval whose start is greater than or equal to `value`,
/// or `intervals.len()` if there is none.
pub fn lower_bound(intervals: &[Interval], value: Value) -> usize {
    intervals.partition_point(|i| i.start < value)
}

/// Given the lower bound `pos` of `value`, returns true if value is covered by one of the intervals.
///
/// The value is either the first value of the interval at `pos` or falls in the interval just before.
#[inline]
pub(crate) fn covered_at(intervals: &[Interval], pos: usize, value: Value) -> bool {
    let is_start = intervals.get(pos).is_some_and(|i| i.start == value);
    is_start || (pos > 0 && value <= intervals[pos - 1].end)
}

impl Strategy for SortedVecIndex {
    fn prepare(&mut self, known: &[Value]) -> Result<(), IndexError> {
        self.intervals = compact(known)?;
        tracing::debug!("{} ranges covering {} values", self.intervals.len(), covered_values(&self.intervals));
        Ok(())
    }

    fn contains(&self, value: Value) -> bool {
        let pos = lower_bound(&self.intervals, value);
        covered_at(&self.intervals, pos, value)
    }

    fn signature(&self) -> &'static str {
        Self::SIGNATURE
    }

    fn num_entries(&self) -> usize {
        self.intervals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound() {
        let intervals = [Interval::new(1, 3), Interval::new(7, 8), Interval::new(10, 10)];
        assert_eq!(lower_bound(&intervals, 0), 0);
        assert_eq!(lower_bound(&intervals, 1), 0);
        assert_eq!(lower_bound(&intervals, 2), 1);
        assert_eq!(lower_bound(&intervals, 7), 1);
        assert_eq!(lower_bound(&intervals, 9), 2);
        assert_eq!(lower_bound(&intervals, 10), 2);
        assert_eq!(lower_bound(&intervals, 11), 3);
        assert_eq!(lower_bound(&[], 11), 0);
    }

    #[test]
    fn test_boundaries() {
        let index = SortedVecIndex::new(&[1, 2, 3, 7, 8, 10]).unwrap();
        assert_eq!(index.intervals().len(), 3);
        for v in [1, 2, 3, 7, 8, 10] {
            assert!(index.contains(v), "{v}");
        }
        for v in [0, 4, 6, 9, 11, u32::MAX] {
            assert!(!index.contains(v), "{v}");
        }
    }

    #[test]
    fn test_extreme_values() {
        let index = SortedVecIndex::new(&[0, u32::MAX]).unwrap();
        assert!(index.contains(0));
        assert!(index.contains(u32::MAX));
        assert!(!index.contains(1));
        assert!(!index.contains(u32::MAX - 1));
    }
}
