use crate::Value;
use std::fmt::{Display, Formatter};

/// A closed range of values `[start, end]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Interval {
    pub start: Value,
    pub end: Value,
}

impl Interval {
    pub fn new(start: Value, end: Value) -> Self {
        debug_assert!(start <= end, "Invalid interval [{start}, {end}]");
        Interval { start, end }
    }

    pub fn singleton(value: Value) -> Self {
        Interval { start: value, end: value }
    }

    #[inline]
    pub fn contains(&self, value: Value) -> bool {
        self.start <= value && value <= self.end
    }

    /// Number of values in the interval.
    /// This is a `u64` because `[0, u32::MAX]` holds 2^32 values.
    pub fn num_values(&self) -> u64 {
        (self.end - self.start) as u64 + 1
    }

    /// True if the two intervals could be merged into a single one, i.e., if they overlap or are directly adjacent.
    pub fn touches(&self, other: &Interval) -> bool {
        let (first, second) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        second.start <= first.end.saturating_add(1)
    }

    /// Iterates over all values of the interval, in ascending order.
    pub fn values(&self) -> impl Iterator<Item = Value> {
        self.start..=self.end
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Total number of values covered by a set of disjoint intervals.
pub fn covered_values(intervals: &[Interval]) -> u64 {
    intervals.iter().map(Interval::num_values).sum()
}
